//! Default value functions for serde deserialization.

pub fn tolerance() -> f32 {
    0.1
}

pub fn enabled() -> bool {
    true
}

pub fn output_dir() -> String {
    "./plots".to_string()
}

pub fn extent() -> f32 {
    75.0
}

pub fn leap_left() -> String {
    "LeapPosition_hand_l.csv".to_string()
}

pub fn leap_right() -> String {
    "LeapPosition_hand_r.csv".to_string()
}

pub fn neuron_left() -> String {
    "PN_LeftHand.csv".to_string()
}

pub fn neuron_right() -> String {
    "PN_RightHand.csv".to_string()
}

pub fn fused_left() -> String {
    "Fused_hand_l.csv".to_string()
}

pub fn fused_right() -> String {
    "Fused_hand_r.csv".to_string()
}

pub fn reference_left() -> String {
    "Optitrack_hand_l.csv".to_string()
}

pub fn reference_right() -> String {
    "Optitrack_hand_r.csv".to_string()
}

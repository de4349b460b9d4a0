pub mod stage1_inputs;
pub mod stage2_predict;
pub mod stage3_report;

//! Small helpers shared by the reports and the executor

pub mod string;

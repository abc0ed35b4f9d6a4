//! This directory provides some features for research.
//! - Leave-one-out accuracy of a learner

/// Provides the leave-one-out evaluation.
pub mod leave_one_out;

pub use leave_one_out::{
    Accuracy,
    LeaveOneOut,
    leave_one_out_accuracy,
};

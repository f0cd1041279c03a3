//! How long transient UI feedback stays on screen.

use std::time::Duration;

/// Admin error lines and save/remove status badges
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Signup form success / validation feedback
pub const SIGNUP_FEEDBACK_TTL: Duration = Duration::from_secs(5);

/// "Coming Soon..." label swapped onto a download button with no target
pub const COMING_SOON_LABEL_TTL: Duration = Duration::from_secs(2);

/// Visual "clicked" state on a download button that opened its link
pub const CLICK_AFFORDANCE: Duration = Duration::from_millis(300);

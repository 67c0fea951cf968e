//! Policy, transforms, and traversal.
//!
//! The pieces, leaves first:
//!
//! - **`transform`**: pure string maskers, one per tier
//! - **`policy`**: sensitivity tiers, field-name sets, classification
//! - **`walk`**: the recursive walker that ties shape dispatch to the policy

mod policy;
mod transform;
mod walk;

pub use policy::{MaskPolicy, MaskPolicyBuilder, SensitivityLevel};
pub use transform::{
    is_email, EmailMask, FallbackMask, FixedMask, MiddleMask, ShapeMask, MASK_TOKEN,
};
pub use walk::{mask, mask_with_report, MaskNote};

pub mod bundle;
pub mod profile;

pub use bundle::{
    ContentPlanDay, CustomerProfile, GeneratedBundle, OfferTier, PainPointGroup, RepurposeEntry,
};
pub use profile::{Channel, InputProfile, PricePoint, ProfileForm, ValidationError, Voice};

//! Per-resource service endpoints.

mod assets;
mod content_types;
mod entries;
mod memberships;
mod roles;
mod spaces;

pub use assets::AssetsService;
pub use content_types::ContentTypesService;
pub use entries::EntriesService;
pub use memberships::MembershipsService;
pub use roles::RolesService;
pub use spaces::SpacesService;

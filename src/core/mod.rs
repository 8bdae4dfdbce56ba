pub mod field;
pub mod scale;
pub mod types;
pub mod view;
pub mod zone;

pub use field::{FencePoint, FieldGeometry, FieldRegion, HitSummary, SprayDirection};
pub use scale::LinearScale;
pub use types::{DomainRect, Hand, PlottedPoint, PointerPoint};
pub use view::{PlotAxes, ViewConfig, ViewOrientation};
pub use zone::{StrikeZoneGeometry, ZoneId, ZoneScheme, classify, zone_bounds, zone_center};

mod polygon;
mod profile;
mod tunnel;

pub use polygon::{draw_line_xz, poly_points, poly_profile, polygon, Polygon};
pub use profile::{get_direction, normalize, offsets, validate, Offset, Validate};
pub(crate) use profile::cuboid_dims;
pub use tunnel::{make_tunnel, tunnel_commands, TunnelExtent, TunnelOptions};

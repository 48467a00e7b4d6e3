pub mod meta;
pub mod routes;

pub use meta::{
    meta_for_content, meta_for_property, meta_for_static, MetaRegistry, MetaScope, MetaTag,
    PageMetadata, SiteInfo,
};
pub use routes::{PageKind, RouteMatch, RouteTable};

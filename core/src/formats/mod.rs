pub mod association;
pub mod beam;
pub mod detection;
pub mod event_type;
pub mod hypocenter;
pub mod site;
pub mod source;
pub mod station_info;

pub use association::AssociationInfo;
pub use beam::Beam;
pub use detection::Detection;
pub use event_type::EventType;
pub use hypocenter::Hypocenter;
pub use site::Site;
pub use source::Source;
pub use station_info::StationInfo;

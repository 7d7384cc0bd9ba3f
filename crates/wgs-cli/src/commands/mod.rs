pub mod assess;
pub mod curves;
pub mod doctor;
pub mod version;

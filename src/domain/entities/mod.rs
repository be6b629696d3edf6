pub mod external;
pub mod role;
pub mod row;

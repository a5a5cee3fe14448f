pub mod check;
pub mod skills;

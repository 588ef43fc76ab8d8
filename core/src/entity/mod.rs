pub mod prelude;

pub mod companies;
pub mod company_metadata;
pub mod customer_companies;
pub mod list_companies;
pub mod lists;

pub use super::companies::Entity as Companies;
pub use super::company_metadata::Entity as CompanyMetadata;
pub use super::customer_companies::Entity as CustomerCompanies;
pub use super::list_companies::Entity as ListCompanies;
pub use super::lists::Entity as Lists;

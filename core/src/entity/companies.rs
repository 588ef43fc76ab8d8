use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub domain: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub latitude: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub longitude: Option<f64>,
    pub employees: Option<i64>,
    pub categories: Vec<String>,
    pub technologies: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::list_companies::Entity")]
    ListCompanies,
    #[sea_orm(has_many = "super::customer_companies::Entity")]
    CustomerCompanies,
    #[sea_orm(has_one = "super::company_metadata::Entity")]
    CompanyMetadata,
}

impl Related<super::list_companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListCompanies.def()
    }
}

impl Related<super::customer_companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerCompanies.def()
    }
}

impl Related<super::company_metadata::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyMetadata.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

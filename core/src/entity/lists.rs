use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::list_companies::Entity")]
    ListCompanies,
}

impl Related<super::list_companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListCompanies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

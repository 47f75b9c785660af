use serde::{Deserialize, Serialize};

use crate::store::CatFact;

/// Cat fact as returned to clients
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CatFactPublic {
    pub id: String,
    pub description: String,
}

impl From<CatFact> for CatFactPublic {
    fn from(fact: CatFact) -> Self {
        CatFactPublic {
            id: fact.id,
            description: fact.description,
        }
    }
}

/// Request body for creating a cat fact
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CatFactCreate {
    pub description: String,
}

/// Request body for a partial update. Omitted or null fields are left as stored.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CatFactUpdate {
    #[serde(default)]
    pub description: Option<String>,
}

/// Response type for successful DELETE operations
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub ok: bool,
}

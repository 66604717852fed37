use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct GraphConfig {
    tenant_id: String,
    client_id: String,
    client_secret: String,
    sender_upn: String,
}

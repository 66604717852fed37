use crate::common::*;

use crate::utils_modules::traits::*;

#[async_trait]
pub trait SqlServerRepository: Send + Sync {
    #[doc = "
        Runs a parameterized query and decodes every row of the first result set
        # Arguments
        * `query`  - T-SQL text with `@P1..@Pn` placeholders
        * `params` - Bound parameters, in placeholder order
    "]
    async fn execute_query<T>(
        &self,
        query: &str,
        params: &[&(dyn ToSql)],
    ) -> anyhow::Result<Vec<T>>
    where
        T: FromSqlRow + Send;
}

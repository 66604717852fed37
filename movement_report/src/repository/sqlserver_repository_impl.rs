use crate::common::*;

use crate::enums::report_error::*;

use crate::model::configs::rdb_config::*;

use crate::traits::repository_traits::sqlserver_repository::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    SQL Server access through deadpool-tiberius.

    The connection is scoped to a single query: each call builds a one-slot
    pool, runs the statement and drops the pool, so nothing stays open
    between daily runs.
"#]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct SqlServerRepositoryImpl {
    conn_str: String,
    timeout_secs: u64,
}

impl SqlServerRepositoryImpl {
    pub fn new(rdb_config: &RdbConfig) -> Result<Self, anyhow::Error> {
        /* 연결 문자열은 기동 시점에 검증한다 */
        Manager::from_ado_string(rdb_config.conn_str()).map_err(|e| {
            ReportError::Connection(format!("invalid DB_CONN_STR: {}", e))
        })?;

        Ok(SqlServerRepositoryImpl {
            conn_str: rdb_config.conn_str().to_string(),
            timeout_secs: *rdb_config.timeout_secs(),
        })
    }

    fn create_pool(&self) -> Result<Pool, ReportError> {
        Manager::from_ado_string(&self.conn_str)
            .map_err(|e| ReportError::Connection(format!("invalid DB_CONN_STR: {}", e)))?
            .max_size(1)
            .create_pool()
            .map_err(|e| ReportError::Connection(format!("failed to build pool: {}", e)))
    }
}

#[async_trait]
impl SqlServerRepository for SqlServerRepositoryImpl {
    #[doc = "Function that EXECUTES a parameterized sql server query"]
    async fn execute_query<T>(
        &self,
        query: &str,
        params: &[&(dyn ToSql)],
    ) -> anyhow::Result<Vec<T>>
    where
        T: FromSqlRow + Send,
    {
        let pool: Pool = self.create_pool()?;

        let mut conn = match timeout(Duration::from_secs(self.timeout_secs), pool.get()).await {
            Ok(Ok(conn)) => conn,
            Ok(Err(e)) => return Err(ReportError::Connection(e.to_string()).into()),
            Err(_) => {
                return Err(ReportError::Connection(format!(
                    "no connection within {}s",
                    self.timeout_secs
                ))
                .into());
            }
        };

        let rows: Vec<Row> = conn
            .query(query, params)
            .await
            .map_err(|e| ReportError::Query(e.to_string()))?
            .into_first_result()
            .await
            .map_err(|e| ReportError::Query(e.to_string()))?;

        /* 조회가 끝나면 즉시 연결 반환 */
        drop(conn);
        drop(pool);

        let decoded: Vec<T> = rows
            .into_iter()
            .map(T::from_sql_row)
            .collect::<anyhow::Result<Vec<T>>>()
            .map_err(|e| ReportError::Query(format!("{:#}", e)))?;

        Ok(decoded)
    }
}

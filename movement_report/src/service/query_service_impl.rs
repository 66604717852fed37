use crate::common::*;

use crate::model::movement::movement_record::*;

use crate::traits::{repository_traits::sqlserver_repository::*, service_traits::query_service::*};

#[doc = r#"
    Daily received volume per capture medium.

    Receipts made by the collector user are `Coletor`, everything else is
    `Computador`. Only family 15 / category 99 items, company 1, form 'P'.
"#]
pub const MOVEMENT_QUERY: &str = r#"
SELECT
  CAST(DTRECEB AS date) AS DataMovimento,
  CASE WHEN HISREAL.USUARIO <> 'ANILDO' THEN 'Computador' ELSE 'Coletor' END AS MeioMovimento,
  CAST(SUM(qtreceb) AS integer) AS NroMovimento
FROM HISREAL
INNER JOIN estoque e
  ON e.codigo = hisreal.codigo
 AND e.CATEGORIA = '99'
 AND e.FAMILIA = '15'
WHERE DTRECEB >= @P1
  AND HISREAL.EMPRESA_RECNO = 1
  AND forma = 'P'
GROUP BY
  CAST(DTRECEB AS date),
  CASE WHEN HISREAL.USUARIO <> 'ANILDO' THEN 'Computador' ELSE 'Coletor' END
ORDER BY
  CAST(DTRECEB AS date) ASC;
"#;

#[derive(Debug, new)]
pub struct QueryServiceImpl<R: SqlServerRepository> {
    sqlserver_repository: R,
}

#[async_trait]
impl<R: SqlServerRepository> QueryService for QueryServiceImpl<R> {
    async fn fetch_movements(&self, cutoff: NaiveDate) -> anyhow::Result<Vec<MovementRecord>> {
        let params: [&(dyn ToSql); 1] = [&cutoff];

        let records: Vec<MovementRecord> = self
            .sqlserver_repository
            .execute_query::<MovementRecord>(MOVEMENT_QUERY, &params)
            .await?;

        info!(
            "[QueryServiceImpl->fetch_movements] {} rows since {}",
            records.len(),
            cutoff
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enums::report_error::*;
    use crate::utils_modules::traits::*;

    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRepository {
        queries: Mutex<Vec<(String, usize)>>,
        fail: bool,
    }

    #[async_trait]
    impl SqlServerRepository for RecordingRepository {
        async fn execute_query<T>(
            &self,
            query: &str,
            params: &[&(dyn ToSql)],
        ) -> anyhow::Result<Vec<T>>
        where
            T: FromSqlRow + Send,
        {
            self.queries
                .lock()
                .unwrap()
                .push((query.to_string(), params.len()));

            if self.fail {
                return Err(ReportError::Connection("login failed".to_string()).into());
            }
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn binds_the_cutoff_as_single_parameter() {
        let service = QueryServiceImpl::new(RecordingRepository::default());
        let cutoff = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let records = service.fetch_movements(cutoff).await.unwrap();
        assert!(records.is_empty());

        let queries = service.sqlserver_repository.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert!(queries[0].0.contains("DTRECEB >= @P1"));
        assert_eq!(queries[0].1, 1);
    }

    #[tokio::test]
    async fn connection_errors_keep_their_type() {
        let service = QueryServiceImpl::new(RecordingRepository {
            fail: true,
            ..RecordingRepository::default()
        });

        let err = service
            .fetch_movements(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Connection(_))
        ));
    }
}

//! Feeds the selection cascades from the live backend.

use async_trait::async_trait;

use super::ApiClient;
use crate::cascade::{ChildOption, ChildSource, Level};
use crate::errors::ClientError;
use crate::models::EntityId;

#[async_trait]
impl ChildSource for ApiClient {
    async fn roots(&self) -> Result<Vec<ChildOption>, ClientError> {
        let programs = self.list_programs().await?;
        Ok(programs
            .into_iter()
            .map(|p| ChildOption::new(p.id, p.program_name))
            .collect())
    }

    async fn children(
        &self,
        level: Level,
        parent: EntityId,
    ) -> Result<Vec<ChildOption>, ClientError> {
        match level {
            Level::Program => self.roots().await,
            Level::Year => {
                let years = self.years_by_program(parent).await?;
                Ok(years
                    .into_iter()
                    .map(|y| ChildOption::new(y.id, y.year_name))
                    .collect())
            }
            Level::Branch => {
                let branches = self.branches_by_year(parent).await?;
                Ok(branches
                    .into_iter()
                    .map(|b| ChildOption::new(b.id, b.branch_name))
                    .collect())
            }
            Level::Section => {
                let sections = self.sections_by_branch(parent).await?;
                Ok(sections
                    .into_iter()
                    .map(|s| {
                        let label = s.display_name(None);
                        ChildOption::new(s.id, label)
                    })
                    .collect())
            }
        }
    }
}

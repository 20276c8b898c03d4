//! `squeue` invocation.

use tracing::info;

use crate::{
    prelude::*,
    process::{capture_stdout, full_command},
};

/// A query for every job charged to a set of Slurm accounts.
///
/// Runs `squeue -a -o %all -A <accounts>`, which prints all columns as a
/// `|` separated table with a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqueueQuery {
    program: String,
    accounts: Vec<String>,
}

impl SqueueQuery {
    /// Create a query. Fails when `accounts` is empty since `squeue -A` needs
    /// at least one account.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sqr_io::squeue::SqueueQuery;
    ///
    /// let query = SqueueQuery::new("squeue", vec!["phys01", "chem02"]).unwrap();
    /// assert_eq!(query.get_full_command(), "squeue -a -o %all -A phys01,chem02");
    /// ```
    pub fn new(program: impl Into<String>, accounts: Vec<impl Into<String>>) -> Result<Self> {
        let accounts: Vec<String> = accounts.into_iter().map(|a| a.into()).collect();
        if accounts.is_empty() {
            return Err(Error::NoAccounts);
        }
        Ok(Self {
            program: program.into(),
            accounts,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Command line arguments passed to the program.
    pub fn args(&self) -> Vec<String> {
        vec![
            String::from("-a"),
            String::from("-o"),
            String::from("%all"),
            String::from("-A"),
            self.accounts.join(","),
        ]
    }

    pub fn get_full_command(&self) -> String {
        full_command(&self.program, &self.args())
    }

    /// Run the query and return the raw table printed on stdout.
    pub async fn run(&self) -> Result<String> {
        let output = capture_stdout(&self.program, &self.args()).await?;
        info!(
            "`{}` returned {} lines",
            self.get_full_command(),
            output.lines().count()
        );
        Ok(output)
    }
}

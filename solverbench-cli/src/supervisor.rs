//! Target Process Supervision
//!
//! Runs one test case against the target program: spawn, send the request
//! line, collect stdout, reap. The whole exchange is bounded by a deadline
//! taken at launch. On expiry the process is killed and reaped before
//! returning, so at most one target process exists at any time.

use solverbench_core::{CaseFailure, CaseOutcome, TestCase, format_request, parse_response};
use std::io;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, ChildStdin, Command};

/// Executes test cases against a fixed target command
#[derive(Debug, Clone)]
pub struct CaseRunner {
    command: Vec<String>,
    timeout: Duration,
}

impl CaseRunner {
    /// Create a runner for `command` (program followed by its arguments)
    pub fn new(command: Vec<String>, timeout: Duration) -> Self {
        Self { command, timeout }
    }

    /// Target program and arguments
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Per-case wall-clock limit
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run a single test case in a fresh process.
    ///
    /// Every failure mode (launch, I/O, timeout, undecodable or short output)
    /// comes back as a `CaseFailure`; nothing here panics or aborts the batch.
    pub async fn run(&self, case: &TestCase) -> Result<CaseOutcome, CaseFailure> {
        let (program, args) = self.command.split_first().ok_or_else(|| {
            CaseFailure::Launch(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty target command",
            ))
        })?;

        let started = Instant::now();
        let deadline = tokio::time::Instant::now() + self.timeout;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(CaseFailure::Launch)?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let request = format_request(&case.input);

        let exchange = async {
            if let Some(mut stdin) = stdin {
                write_request(&mut stdin, &request).await?;
                // stdin dropped here: end of input for the target
            }
            let mut raw = Vec::new();
            if let Some(mut stdout) = stdout {
                stdout.read_to_end(&mut raw).await?;
            }
            child.wait().await?;
            Ok::<_, io::Error>(raw)
        };
        let result = tokio::time::timeout_at(deadline, exchange).await;

        let raw = match result {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                reap(&mut child).await;
                return Err(CaseFailure::Io(e));
            }
            Err(_) => {
                reap(&mut child).await;
                return Err(CaseFailure::Timeout(self.timeout));
            }
        };
        let wall_clock_micros = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        let stdout = String::from_utf8(raw)?;
        let response = parse_response(&stdout)?;

        Ok(CaseOutcome {
            is_correct: response.label == case.expected_label,
            effort_metric: response.effort,
            elapsed_microseconds: response.time_us,
            wall_clock_micros,
        })
    }
}

/// Write the request line. A target that exits without reading its input is
/// not an error by itself; its stdout decides the outcome.
async fn write_request(stdin: &mut ChildStdin, request: &str) -> io::Result<()> {
    let written = async {
        stdin.write_all(request.as_bytes()).await?;
        stdin.flush().await
    };
    match written.await {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Kill the target (if still running) and wait for it so no zombie is left
async fn reap(child: &mut Child) {
    if let Err(e) = child.kill().await {
        tracing::trace!("kill after failed exchange: {e}");
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["sh".to_string(), "-c".to_string(), script.to_string()]
    }

    fn runner(script: &str) -> CaseRunner {
        CaseRunner::new(sh(script), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_successful_case() {
        let runner = runner(r#"read pos; echo "5 100 2000""#);
        let outcome = runner.run(&TestCase::new("pos1", "5")).await.unwrap();

        assert!(outcome.is_correct);
        assert_eq!(outcome.effort_metric, 100);
        assert_eq!(outcome.elapsed_microseconds, 2000);
        assert!(outcome.wall_clock_micros > 0);
    }

    #[tokio::test]
    async fn test_input_is_delivered_verbatim() {
        // Echo the received position back as the label
        let runner = runner(r#"read pos; echo "$pos 1 1""#);
        let outcome = runner.run(&TestCase::new("4455", "4455")).await.unwrap();
        assert!(outcome.is_correct);
    }

    #[tokio::test]
    async fn test_label_compared_exactly() {
        let runner = runner(r#"read pos; echo "05 1 1""#);
        let outcome = runner.run(&TestCase::new("p", "5")).await.unwrap();
        assert!(!outcome.is_correct);
    }

    #[tokio::test]
    async fn test_short_output_is_malformed() {
        let runner = runner(r#"read pos; echo "5 100""#);
        let err = runner.run(&TestCase::new("p", "5")).await.unwrap_err();
        assert!(matches!(err, CaseFailure::MalformedResponse(_)), "{err}");
    }

    #[tokio::test]
    async fn test_non_integer_effort_is_malformed() {
        let runner = runner(r#"read pos; echo "5 many 2000""#);
        let err = runner.run(&TestCase::new("p", "5")).await.unwrap_err();
        assert!(matches!(err, CaseFailure::MalformedResponse(_)), "{err}");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_decode_failure() {
        let runner = runner(r#"read pos; printf '\377 1 1\n'"#);
        let err = runner.run(&TestCase::new("p", "5")).await.unwrap_err();
        assert!(matches!(err, CaseFailure::Decode(_)), "{err}");
    }

    #[tokio::test]
    async fn test_exit_status_is_ignored() {
        let runner = runner(r#"read pos; echo "5 1 1"; exit 3"#);
        assert!(runner.run(&TestCase::new("p", "5")).await.is_ok());
    }

    #[tokio::test]
    async fn test_target_that_ignores_stdin() {
        let runner = runner(r#"echo "5 1 1""#);
        assert!(runner.run(&TestCase::new("p", "5")).await.is_ok());
    }

    #[tokio::test]
    async fn test_timeout_kills_target() {
        let runner = CaseRunner::new(sh("read pos; exec sleep 10"), Duration::from_millis(200));
        let started = Instant::now();
        let err = runner.run(&TestCase::new("p", "5")).await.unwrap_err();

        assert!(matches!(err, CaseFailure::Timeout(_)), "{err}");
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_launch_failure() {
        let runner = CaseRunner::new(
            vec!["/nonexistent/solverbench-target".to_string()],
            Duration::from_secs(1),
        );
        let err = runner.run(&TestCase::new("p", "5")).await.unwrap_err();
        assert!(matches!(err, CaseFailure::Launch(_)), "{err}");
    }

    #[tokio::test]
    async fn test_empty_command_is_launch_failure() {
        let runner = CaseRunner::new(Vec::new(), Duration::from_secs(1));
        let err = runner.run(&TestCase::new("p", "5")).await.unwrap_err();
        assert!(matches!(err, CaseFailure::Launch(_)), "{err}");
    }

    #[tokio::test]
    async fn test_arguments_passed_through() {
        let runner = CaseRunner::new(
            vec![
                "sh".to_string(),
                "-c".to_string(),
                r#"read pos; echo "$1 1 1""#.to_string(),
                "argv0".to_string(),
                "--solver=negamax".to_string(),
            ],
            Duration::from_secs(5),
        );
        let outcome = runner
            .run(&TestCase::new("p", "--solver=negamax"))
            .await
            .unwrap();
        assert!(outcome.is_correct);
    }
}

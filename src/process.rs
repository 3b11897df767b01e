use crate::error::ProcessError;
use std::fmt;
use std::thread;
use std::time::Duration;

/// Identifiers of the running process and the process that launched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessIds {
    pub pid: u32,
    pub ppid: u32,
}

impl ProcessIds {
    /// Reads the current process and parent ids from the operating system.
    #[cfg(unix)]
    pub fn current() -> Result<Self, ProcessError> {
        use nix::unistd::{getpid, getppid};

        Ok(ProcessIds {
            pid: getpid().as_raw() as u32,
            ppid: getppid().as_raw() as u32,
        })
    }

    /// Reads the current process and parent ids from the operating system.
    #[cfg(not(unix))]
    pub fn current() -> Result<Self, ProcessError> {
        use sysinfo::{get_current_pid, ProcessesToUpdate, System};

        let pid = get_current_pid().map_err(|e| ProcessError::Unavailable(e.to_string()))?;
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), false);
        let ppid = system
            .process(pid)
            .and_then(|p| p.parent())
            .ok_or_else(|| ProcessError::Unavailable(format!("no parent for pid {}", pid)))?;

        Ok(ProcessIds {
            pid: pid.as_u32(),
            ppid: ppid.as_u32(),
        })
    }
}

impl fmt::Display for ProcessIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.pid, self.ppid)
    }
}

/// Blocks for `secs` seconds in 1-second chunks. Does nothing unless
/// `secs` is positive.
pub fn sleep_secs(secs: i32) {
    for _ in 0..secs.max(0) {
        thread::sleep(Duration::from_secs(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_current_matches_os() {
        let ids = ProcessIds::current().unwrap();
        assert_eq!(ids.pid, std::process::id());
        assert!(ids.ppid > 0);
        assert_ne!(ids.pid, ids.ppid);
    }

    #[test]
    fn test_display() {
        let ids = ProcessIds { pid: 4242, ppid: 1 };
        assert_eq!(ids.to_string(), "4242:1");
    }

    #[test]
    fn test_non_positive_sleep_returns_immediately() {
        let start = Instant::now();
        sleep_secs(0);
        sleep_secs(-5);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_sleep_blocks() {
        let start = Instant::now();
        sleep_secs(1);
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}

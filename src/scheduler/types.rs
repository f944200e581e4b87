/*!
 * Scheduler Types
 * Policy selector and time quantum configuration
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Ticks;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Scheduling policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Shortest job first, non-preemptive
    SjfNonPreemptive,
    /// Shortest remaining time first
    SjfPreemptive,
    /// Round-robin with fixed time quantum
    RoundRobin,
    /// Lowest priority value first, non-preemptive
    PriorityNonPreemptive,
    /// Lowest priority value first, re-evaluated on every arrival
    PriorityPreemptive,
}

impl Policy {
    /// Every supported policy, in presentation order
    pub const ALL: [Policy; 6] = [
        Self::Fcfs,
        Self::SjfNonPreemptive,
        Self::SjfPreemptive,
        Self::RoundRobin,
        Self::PriorityNonPreemptive,
        Self::PriorityPreemptive,
    ];

    /// Parse from string representation
    pub fn from_str(s: &str) -> SchedulerResult<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "sjf_non_preemptive" | "sjf_np" => Ok(Self::SjfNonPreemptive),
            "srtf" | "sjf_preemptive" | "sjf_p" => Ok(Self::SjfPreemptive),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "priority" | "prio" | "priority_non_preemptive" | "priority_np" => {
                Ok(Self::PriorityNonPreemptive)
            }
            "priority_preemptive" | "priority_p" | "preprio" => Ok(Self::PriorityPreemptive),
            _ => Err(SchedulerError::UnsupportedPolicy(s.to_string())),
        }
    }

    /// Convert to canonical string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::SjfNonPreemptive => "sjf_non_preemptive",
            Self::SjfPreemptive => "sjf_preemptive",
            Self::RoundRobin => "round_robin",
            Self::PriorityNonPreemptive => "priority_non_preemptive",
            Self::PriorityPreemptive => "priority_preemptive",
        }
    }

    /// Human-readable label used by text reports
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::SjfNonPreemptive => "SJF Non-Preemptive",
            Self::SjfPreemptive => "SJF Preemptive",
            Self::RoundRobin => "Round Robin",
            Self::PriorityNonPreemptive => "Priority Non-Preemptive",
            Self::PriorityPreemptive => "Priority Preemptive",
        }
    }

    /// Whether a running process can lose the CPU before it finishes
    ///
    /// Preemptive policies report `start_time = arrival` in their metrics.
    #[inline]
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::SjfPreemptive | Self::RoundRobin | Self::PriorityPreemptive
        )
    }

    #[inline]
    pub const fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Policy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::from_str(s)
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Round-robin time slice, always at least one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(ticks: Ticks) -> SchedulerResult<Self> {
        if ticks <= 0 {
            return Err(SchedulerError::MissingQuantum {
                value: Some(ticks.to_string()),
            });
        }
        Ok(Self(ticks))
    }

    /// Validate an optional caller-supplied quantum; absence is an error
    pub fn require(value: Option<Ticks>) -> SchedulerResult<Self> {
        match value {
            Some(ticks) => Self::new(ticks),
            None => Err(SchedulerError::MissingQuantum { value: None }),
        }
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Ticks::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

use chrono::{DateTime, Utc};
use remote_status::{BuildStatus, JobState};
use signal::{Pattern, SignalState, COLOR_BAD, COLOR_GOOD, MAX_PARAM};

/// Works out what the tree should show for `job_state`.
///
/// Without a job, or without any build, the previous signal is returned as
/// is. The color comes from the last *completed* build; the pattern comes
/// from the last build, which may still be running. If nothing has completed
/// yet the previous color is kept.
pub fn translate(job_state: Option<&JobState>, previous: SignalState, now: DateTime<Utc>) -> SignalState {
    let job_state = match job_state {
        Some(state) => state,
        None => return previous,
    };
    let last_build = match job_state.last_build {
        Some(ref build) => build,
        None => return previous,
    };

    let mut signal = previous;
    if let Some(ref completed) = job_state.last_completed_build {
        let color = match completed.status {
            BuildStatus::Success => COLOR_GOOD,
            _ => COLOR_BAD,
        };
        signal = signal.with_color(color);
    }

    match last_build.progress(now) {
        Some(progress) => {
            let fraction = progress.fraction();
            if fraction >= 1.0 {
                signal.with_pattern(Pattern::Run, MAX_PARAM)
            } else {
                let percent = (fraction * 100.0).floor().max(0.0).min(99.0) as u8;
                signal.with_pattern(Pattern::Progress, percent)
            }
        }
        None => signal.with_pattern(Pattern::Done, MAX_PARAM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use remote_status::BuildRecord;

    const START_MILLIS: i64 = 1_500_000_000_000;

    fn build(status: BuildStatus, building: bool, estimated_millis: i64) -> BuildRecord {
        BuildRecord {
            number: 42,
            status: status,
            building: building,
            timestamp_millis: START_MILLIS,
            estimated_duration_millis: estimated_millis,
        }
    }

    fn job(last: Option<BuildRecord>, completed: Option<BuildRecord>) -> JobState {
        JobState {
            job_name: "TEST".to_string(),
            last_build: last,
            last_completed_build: completed,
        }
    }

    fn after_millis(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(START_MILLIS + millis).unwrap()
    }

    fn failing_and_running(elapsed_millis: i64, estimated_millis: i64) -> SignalState {
        let state = job(
            Some(build(BuildStatus::Unknown, true, estimated_millis)),
            Some(build(BuildStatus::Failure, false, estimated_millis)),
        );
        translate(Some(&state), SignalState::default(), after_millis(elapsed_millis))
    }

    #[test]
    fn passing_idle_job_spins_green() {
        let completed = build(BuildStatus::Success, false, 100_000);
        let state = job(Some(completed.clone()), Some(completed));
        let signal = translate(Some(&state), SignalState::default(), after_millis(0));
        assert_eq!(signal.encode(), [0, 255, 0, 3, 100]);
    }

    #[test]
    fn running_build_shows_progress() {
        assert_eq!(failing_and_running(30_000, 100_000).encode(), [255, 0, 0, 2, 30]);
    }

    #[test]
    fn overrun_build_pulses() {
        assert_eq!(failing_and_running(150_000, 100_000).encode(), [255, 0, 0, 1, 100]);
    }

    #[test]
    fn progress_threshold() {
        let almost = failing_and_running(999_999, 1_000_000);
        assert_eq!((almost.pattern, almost.param), (Pattern::Progress, 99));

        let exactly = failing_and_running(1_000_000, 1_000_000);
        assert_eq!((exactly.pattern, exactly.param), (Pattern::Run, 100));

        let over = failing_and_running(1_000_001, 1_000_000);
        assert_eq!((over.pattern, over.param), (Pattern::Run, 100));
    }

    #[test]
    fn progress_is_floored() {
        assert_eq!(failing_and_running(29_999, 100_000).param, 29);
        assert_eq!(failing_and_running(0, 100_000).param, 0);
    }

    #[test]
    fn build_started_in_the_future_clamps_to_zero() {
        let signal = failing_and_running(-5_000, 100_000);
        assert_eq!((signal.pattern, signal.param), (Pattern::Progress, 0));
    }

    #[test]
    fn missing_estimate_pulses() {
        assert_eq!(failing_and_running(10_000, -1).pattern, Pattern::Run);
        assert_eq!(failing_and_running(10_000, 0).pattern, Pattern::Run);
    }

    #[test]
    fn absurd_estimate_pulses() {
        assert_eq!(failing_and_running(10_000, i64::MIN).encode(), [255, 0, 0, 1, 100]);
        assert_eq!(failing_and_running(10_000, i64::MAX).encode(), [255, 0, 0, 2, 0]);
    }

    #[test]
    fn unknown_and_failure_are_both_red() {
        for status in &[BuildStatus::Failure, BuildStatus::Unknown] {
            let completed = build(*status, false, 1000);
            let state = job(Some(completed.clone()), Some(completed));
            let signal = translate(Some(&state), SignalState::default(), after_millis(0));
            assert_eq!((signal.red, signal.green, signal.blue), (255, 0, 0));
        }
    }

    #[test]
    fn nothing_to_translate_keeps_previous() {
        let empty = job(None, None);
        let completed_only = job(None, Some(build(BuildStatus::Success, false, 1000)));
        for &color in &[0x000000, 0x00FF00, 0xFF0000, 0x123456, 0xFFFFFF] {
            for &pattern in &[Pattern::Run, Pattern::Progress, Pattern::Done] {
                for &param in &[0, 1, 42, 99, 100] {
                    let previous = SignalState::default()
                        .with_color(color)
                        .with_pattern(pattern, param);
                    assert_eq!(translate(None, previous, after_millis(0)), previous);
                    assert_eq!(translate(Some(&empty), previous, after_millis(0)), previous);
                    assert_eq!(translate(Some(&completed_only), previous, after_millis(0)), previous);
                }
            }
        }
    }

    #[test]
    fn first_build_keeps_previous_color() {
        let state = job(Some(build(BuildStatus::Unknown, true, 100_000)), None);

        let from_startup = translate(Some(&state), SignalState::default(), after_millis(50_000));
        assert_eq!(from_startup.encode(), [0, 0, 0, 2, 50]);

        let previous = SignalState::default().with_color(COLOR_GOOD);
        let from_green = translate(Some(&state), previous, after_millis(50_000));
        assert_eq!(from_green.encode(), [0, 255, 0, 2, 50]);
    }

    #[test]
    fn param_always_in_range() {
        let elapsed = [-100_000, 0, 1, 50_000, 99_999, 100_000, 100_001, 10_000_000];
        let estimates = [-1, 0, 1, 100_000, 3_600_000];
        for &e in elapsed.iter() {
            for &d in estimates.iter() {
                let signal = failing_and_running(e, d);
                assert!(signal.param <= 100);
                match signal.pattern {
                    Pattern::Progress => assert!(signal.param <= 99),
                    Pattern::Run => assert_eq!(signal.param, 100),
                    Pattern::Done => panic!("running build reported as done"),
                }
            }
        }
    }
}

use std::collections::{HashMap, HashSet};

use u_cpusched::models::{JobStatus, Process};
use u_cpusched::monitor::HorizonPolicy;
use u_cpusched::scheduler::{simulate, Policy, SimulationReport, SimulationRequest};
use u_cpusched::workload::SyntheticWorkload;

const HORIZON: i64 = 60;
const JOBS_PER_PROCESS: usize = 4;
const QUANTUM: i64 = 3;

fn run(procs: &[Process], policy: Policy) -> SimulationReport {
    let request = SimulationRequest::for_policy(procs.to_vec(), policy)
        .with_jobs_per_process(JOBS_PER_PROCESS)
        .with_horizon(HORIZON)
        .with_quantum(QUANTUM);
    simulate(&request).unwrap()
}

fn workloads() -> Vec<Vec<Process>> {
    (0..25u64)
        .map(|seed| {
            SyntheticWorkload::new(1 + (seed as usize % 5))
                .with_seed(seed)
                .with_period_range(3, 15)
                .generate()
        })
        .collect()
}

fn execution_by_process(procs: &[Process]) -> HashMap<u32, i64> {
    procs.iter().map(|p| (p.id, p.execution)).collect()
}

fn releases(procs: &[Process]) -> HashSet<i64> {
    procs
        .iter()
        .flat_map(|p| (0..JOBS_PER_PROCESS).map(move |j| p.release_of(j)))
        .filter(|&r| r < HORIZON)
        .collect()
}

#[test]
fn intervals_never_overlap() {
    for procs in workloads() {
        for policy in Policy::ALL {
            let report = run(&procs, policy);
            let mut entries = report.entries().to_vec();
            entries.sort_by_key(|e| e.start);
            for pair in entries.windows(2) {
                assert!(
                    pair[0].end <= pair[1].start,
                    "{policy}: {:?} overlaps {:?}",
                    pair[0],
                    pair[1]
                );
            }
            assert!(entries.iter().all(|e| e.end > e.start));
        }
    }
}

#[test]
fn completed_jobs_receive_exactly_their_execution_time() {
    for procs in workloads() {
        let execution = execution_by_process(&procs);
        for policy in Policy::ALL {
            let report = run(&procs, policy);
            for outcome in report.outcomes().iter().filter(|o| o.is_completed()) {
                let entries = report
                    .schedule
                    .entries_for_job(outcome.process_id, outcome.job_index);
                let total: i64 = entries.iter().map(|e| e.duration()).sum();
                assert_eq!(total, execution[&outcome.process_id], "{policy}: {outcome:?}");
                assert_eq!(entries.last().map(|e| e.end), outcome.completion);
                assert!(entries.iter().all(|e| e.start >= outcome.release));
            }
        }
    }
}

#[test]
fn misses_match_late_completions() {
    for procs in workloads() {
        for policy in Policy::ALL {
            let report = run(&procs, policy);
            for outcome in report.outcomes() {
                let missed = report
                    .schedule
                    .is_missed(outcome.process_id, outcome.job_index);
                match outcome.completion {
                    Some(c) => assert_eq!(missed, c > outcome.absolute_deadline, "{policy}"),
                    None => assert!(!missed, "{policy}: abandoned job reported as missed"),
                }
            }
            let unique: HashSet<(u32, usize)> = report
                .missed()
                .iter()
                .map(|m| (m.process_id, m.job_index))
                .collect();
            assert_eq!(unique.len(), report.missed().len(), "{policy}: duplicate miss");
        }
    }
}

#[test]
fn every_generated_job_has_one_outcome() {
    for procs in workloads() {
        let expected = releases_per_job(&procs);
        for policy in Policy::ALL {
            let report = run(&procs, policy);
            assert_eq!(report.stats.total_jobs, expected, "{policy}");
            assert_eq!(
                report.stats.completed_jobs + report.stats.abandoned_jobs,
                report.stats.total_jobs
            );
        }
    }
}

fn releases_per_job(procs: &[Process]) -> usize {
    procs
        .iter()
        .map(|p| {
            (0..JOBS_PER_PROCESS)
                .filter(|&j| p.release_of(j) < HORIZON)
                .count()
        })
        .sum()
}

#[test]
fn fcfs_follows_release_order() {
    for procs in workloads() {
        let report = run(&procs, Policy::Fcfs);
        let entries = report.entries();
        for pair in entries.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
        let order: Vec<(i64, u32, usize)> = entries
            .iter()
            .map(|e| {
                let o = report.schedule.outcome(e.process_id, e.job_index).unwrap();
                (o.release, e.process_id, e.job_index)
            })
            .collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }
}

#[test]
fn round_robin_slices_never_exceed_quantum() {
    for procs in workloads() {
        let report = run(&procs, Policy::RoundRobin);
        assert!(report.entries().iter().all(|e| e.duration() <= QUANTUM));
    }
}

#[test]
fn preemptions_happen_only_at_releases() {
    let preemptive = [
        Policy::Srt,
        Policy::Priority,
        Policy::MinimumLaxity,
        Policy::Rms,
        Policy::Edf,
    ];
    for procs in workloads() {
        let release_times = releases(&procs);
        for policy in preemptive {
            let report = run(&procs, policy);
            for outcome in report.outcomes() {
                let entries = report
                    .schedule
                    .entries_for_job(outcome.process_id, outcome.job_index);
                // Every interval but the last ended because the job was preempted.
                for e in entries.iter().rev().skip(1) {
                    assert!(
                        release_times.contains(&e.end),
                        "{policy}: preempted at t={} with no release",
                        e.end
                    );
                }
            }
        }
    }
}

#[test]
fn preemptive_policies_stop_at_horizon() {
    for procs in workloads() {
        for policy in Policy::ALL.into_iter().filter(Policy::is_preemptive) {
            let report = run(&procs, policy);
            assert!(report.entries().iter().all(|e| e.end <= HORIZON), "{policy}");
        }
    }
}

#[test]
fn runs_are_deterministic() {
    for procs in workloads().into_iter().take(5) {
        for policy in Policy::ALL {
            let a = run(&procs, policy);
            let b = run(&procs, policy);
            assert_eq!(a.entries(), b.entries());
            assert_eq!(a.missed(), b.missed());
        }
    }
}

#[test]
fn overload_is_reported_for_every_policy() {
    let procs = vec![Process::new(0, 2, 3)];
    for policy in Policy::ALL {
        let report = run(&procs, policy);
        assert!((report.stats.utilization - 1.5).abs() < 1e-10);
        assert!(report.stats.overloaded, "{policy}");
    }
}

#[test]
fn edf_meets_all_deadlines_when_utilization_fits() {
    for seed in 0..20u64 {
        let procs = SyntheticWorkload::new(3)
            .with_seed(seed)
            .with_period_range(10, 20)
            .with_implicit_deadlines()
            .generate();
        let utilization: f64 = procs.iter().map(Process::utilization).sum();
        if utilization > 1.0 {
            continue;
        }
        let request = SimulationRequest::for_policy(procs, Policy::Edf)
            .with_jobs_per_process(2)
            .with_horizon(1_000);
        let report = simulate(&request).unwrap();
        assert!(report.missed().is_empty(), "seed {seed}: {:?}", report.missed());
        assert!(report.stats.all_deadlines_met());
    }
}

#[test]
fn horizon_count_as_miss_reports_truncated_jobs() {
    let procs = vec![Process::new(0, 10, 6), Process::new(1, 10, 6)];
    let request = SimulationRequest::for_policy(procs, Policy::Edf)
        .with_jobs_per_process(1)
        .with_horizon(8)
        .with_horizon_policy(HorizonPolicy::CountAsMiss);
    let report = simulate(&request).unwrap();

    assert_eq!(report.stats.abandoned_jobs, 1);
    assert_eq!(report.stats.missed_jobs, 1);
    let abandoned = report
        .outcomes()
        .iter()
        .find(|o| o.status == JobStatus::Abandoned)
        .unwrap();
    assert!(report
        .schedule
        .is_missed(abandoned.process_id, abandoned.job_index));
}

#[test]
fn public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SimulationRequest>();
    assert_send_sync::<SimulationReport>();
    assert_send_sync::<u_cpusched::scheduler::Simulator>();
    assert_send_sync::<u_cpusched::dispatching::EventEngine>();
}

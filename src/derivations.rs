//! Read-side views over the store's collections.
//!
//! Everything here is a pure function of its inputs and is recomputed on
//! every read; nothing is cached between calls.

use crate::domain::{MILLIS_PER_HOUR, Timestamp};
use crate::models::{JobPost, RatingTally, User, WorkerProfile, WorkerStatus};

/// Default window during which a job counts as urgent.
pub const URGENT_WINDOW_MILLIS: i64 = 2 * MILLIS_PER_HOUR;

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Admin search: case-insensitive substring on name or phone. A blank term
/// matches everyone.
#[must_use]
pub fn search_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let term = term.trim();
    users
        .iter()
        .filter(|u| {
            term.is_empty()
                || contains_ignore_case(u.name(), term)
                || contains_ignore_case(u.phone(), term)
        })
        .collect()
}

/// Admin "pending" tab: pending workers matching the search term.
#[must_use]
pub fn pending_workers(users: &[User], term: &str) -> Vec<WorkerProfile> {
    workers_with_status(users, term, WorkerStatus::Pending)
}

/// Admin "active" tab: approved workers matching the search term.
#[must_use]
pub fn active_workers(users: &[User], term: &str) -> Vec<WorkerProfile> {
    workers_with_status(users, term, WorkerStatus::Approved)
}

/// Workers currently in `status` whose name or phone matches `term`, in
/// collection order.
#[must_use]
pub fn workers_with_status(
    users: &[User],
    term: &str,
    status: WorkerStatus,
) -> Vec<WorkerProfile> {
    search_users(users, term)
        .into_iter()
        .filter_map(User::as_worker)
        .filter(|w| w.status == status)
        .cloned()
        .collect()
}

/// Employer search filters. Empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerFilter {
    pub skill: Option<String>,
    pub area: Option<String>,
}

impl WorkerFilter {
    #[must_use]
    pub fn matches(&self, worker: &WorkerProfile) -> bool {
        let skill_ok = match self.skill.as_deref().map(str::trim) {
            Some(skill) if !skill.is_empty() => worker.skills.iter().any(|s| s.matches(skill)),
            _ => true,
        };
        let area_ok = match self.area.as_deref().map(str::trim) {
            Some(area) if !area.is_empty() => contains_ignore_case(&worker.area, area),
            _ => true,
        };
        skill_ok && area_ok
    }
}

/// Stable sort: available workers first, then by average rating descending.
pub fn rank_workers(workers: &mut [WorkerProfile]) {
    workers.sort_by(|a, b| {
        b.is_available_today
            .cmp(&a.is_available_today)
            .then_with(|| b.rating.ranking_score().total_cmp(&a.rating.ranking_score()))
    });
}

/// Employer "find workers" view: approved workers passing `filter`, ranked.
#[must_use]
pub fn find_workers(users: &[User], filter: &WorkerFilter) -> Vec<WorkerProfile> {
    let mut workers: Vec<WorkerProfile> = users
        .iter()
        .filter_map(User::as_worker)
        .filter(|w| w.is_approved() && filter.matches(w))
        .cloned()
        .collect();
    rank_workers(&mut workers);
    workers
}

/// Stable sort: jobs whose area contains `worker_area` first, each group
/// newest first.
pub fn rank_jobs(jobs: &mut [JobPost], worker_area: &str) {
    jobs.sort_by(|a, b| {
        let a_match = contains_ignore_case(&a.area, worker_area);
        let b_match = contains_ignore_case(&b.area, worker_area);
        b_match
            .cmp(&a_match)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// Worker "find work" view: active jobs ranked for `worker_area`.
#[must_use]
pub fn find_work(jobs: &[JobPost], worker_area: &str) -> Vec<JobPost> {
    let mut active: Vec<JobPost> = jobs.iter().filter(|j| j.is_active()).cloned().collect();
    rank_jobs(&mut active, worker_area);
    active
}

/// Employer "my jobs" view: the employer's own active jobs.
#[must_use]
pub fn employer_jobs(jobs: &[JobPost], employer_id: &str) -> Vec<JobPost> {
    jobs.iter()
        .filter(|j| j.employer_id == employer_id && j.is_active())
        .cloned()
        .collect()
}

#[must_use]
pub fn is_urgent(job: &JobPost, now: Timestamp, window_millis: i64) -> bool {
    now.saturating_sub(job.created_at) < window_millis
}

#[must_use]
pub fn average_rating(tally: &RatingTally) -> Option<f64> {
    tally.average()
}

#[must_use]
pub fn display_rating(tally: &RatingTally) -> String {
    tally.display()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, JobStatus, Skill};

    fn worker(id: &str, available: bool, rating: RatingTally) -> WorkerProfile {
        WorkerProfile {
            account: Account {
                id: id.to_string(),
                phone: format!("98000{id}"),
                name: format!("Worker {id}"),
                created_at: 0,
                password: None,
                bio: None,
            },
            photo_url: String::new(),
            id_proof_url: None,
            skills: vec![Skill::Mason],
            area: "Mansarovar".to_string(),
            daily_wage: 500,
            experience_years: 1,
            is_available_today: available,
            last_available_update: 0,
            status: WorkerStatus::Approved,
            rejection_reason: None,
            rating,
        }
    }

    fn job(id: &str, area: &str, created_at: Timestamp) -> JobPost {
        JobPost {
            id: id.to_string(),
            employer_id: "e1".to_string(),
            employer_name: "Employer".to_string(),
            job_type: Skill::Helper,
            area: area.to_string(),
            workers_needed: 1,
            payment: 500,
            date_needed: "Today".to_string(),
            description: None,
            created_at,
            status: JobStatus::Active,
        }
    }

    fn worker_ids(workers: &[WorkerProfile]) -> Vec<&str> {
        workers.iter().map(|w| w.account.id.as_str()).collect()
    }

    fn job_ids(jobs: &[JobPost]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn availability_dominates_rating() {
        let mut workers = vec![
            worker("A", true, RatingTally::new(4, 1)),
            worker("B", false, RatingTally::new(5, 1)),
            worker("C", true, RatingTally::new(3, 1)),
        ];
        rank_workers(&mut workers);
        assert_eq!(worker_ids(&workers), vec!["A", "C", "B"]);
    }

    #[test]
    fn unrated_workers_rank_as_zero_and_ties_keep_order() {
        let mut workers = vec![
            worker("new1", true, RatingTally::default()),
            worker("rated", true, RatingTally::new(2, 2)),
            worker("new2", true, RatingTally::default()),
        ];
        rank_workers(&mut workers);
        assert_eq!(worker_ids(&workers), vec!["rated", "new1", "new2"]);
    }

    #[test]
    fn area_match_then_newest_first() {
        let mut jobs = vec![
            job("t100", "Mansarovar", 100),
            job("t300", "Sodala", 300),
            job("t200", "Mansarovar Extension", 200),
        ];
        rank_jobs(&mut jobs, "mansarovar");
        assert_eq!(job_ids(&jobs), vec!["t200", "t100", "t300"]);
    }

    #[test]
    fn find_work_drops_closed_jobs() {
        let mut closed = job("closed", "Mansarovar", 500);
        closed.status = JobStatus::Closed;
        let jobs = vec![closed, job("open", "Sodala", 1)];
        assert_eq!(job_ids(&find_work(&jobs, "Mansarovar")), vec!["open"]);
    }

    #[test]
    fn urgency_window() {
        let j = job("j", "x", 1_000);
        assert!(is_urgent(&j, 1_000 + URGENT_WINDOW_MILLIS - 1, URGENT_WINDOW_MILLIS));
        assert!(!is_urgent(&j, 1_000 + URGENT_WINDOW_MILLIS, URGENT_WINDOW_MILLIS));
    }

    #[test]
    fn urgency_tolerates_extreme_timestamps() {
        let ancient = job("ancient", "x", i64::MIN);
        assert!(!is_urgent(&ancient, 1_700_000_000_000, URGENT_WINDOW_MILLIS));

        let future = job("future", "x", i64::MAX);
        assert!(is_urgent(&future, -1_000, URGENT_WINDOW_MILLIS));
    }

    #[test]
    fn worker_filter_skill_and_area() {
        let mut w = worker("w", true, RatingTally::default());
        w.skills = vec![Skill::TileWorker, Skill::Mason];
        w.area = "Vaishali Nagar".to_string();

        let by_skill = WorkerFilter {
            skill: Some("tile".to_string()),
            area: None,
        };
        assert!(by_skill.matches(&w));

        let both = WorkerFilter {
            skill: Some("mason".to_string()),
            area: Some("raja".to_string()),
        };
        assert!(!both.matches(&w));

        let blank = WorkerFilter {
            skill: Some("  ".to_string()),
            area: Some(String::new()),
        };
        assert!(blank.matches(&w));
    }

    #[test]
    fn admin_search_matches_name_or_phone() {
        let users: Vec<User> = vec![
            worker("1", true, RatingTally::default()).into(),
            worker("2", true, RatingTally::default()).into(),
        ];
        assert_eq!(search_users(&users, "WORKER 1").len(), 1);
        assert_eq!(search_users(&users, "980002").len(), 1);
        assert_eq!(search_users(&users, "").len(), 2);
    }

    #[test]
    fn display_rating_rule() {
        assert_eq!(display_rating(&RatingTally::default()), "New");
        assert_eq!(average_rating(&RatingTally::default()), None);
        assert_eq!(display_rating(&RatingTally::new(9, 2)), "4.5");
    }
}

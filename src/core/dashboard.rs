//! Role-specific dashboards
//!
//! Each role sees a different summary of the same registry and directory.
//! [`Dashboard::for_user`] matches on the user variant, so a new role cannot
//! be added without deciding what it sees.

use crate::core::directory::{LeaderboardEntry, UserDirectory};
use crate::core::events::{EventRegistry, EventSummary, Participation, RegistryStats};
use crate::core::models::{Admin, Alumni, Event, Student, User, UserId};
use serde::Serialize;
use std::collections::HashMap;

/// Events of each kind shown on a student dashboard
pub const STUDENT_EVENT_LIMIT: usize = 3;
/// Upcoming events shown on the admin dashboard
pub const ADMIN_EVENT_LIMIT: usize = 5;
/// Rows of the leaderboard shown on dashboards
pub const LEADERBOARD_LIMIT: usize = 5;
/// Companies listed in alumni statistics
pub const TOP_COMPANIES_LIMIT: usize = 5;

/// Dashboard content for the signed-in user
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Dashboard {
    Student(StudentDashboard),
    Alumni(AlumniDashboard),
    Admin(AdminDashboard),
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentDashboard {
    pub profile: Student,
    pub upcoming_events: Vec<StudentEvent>,
    pub past_events: Vec<StudentEvent>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// An event with the viewing student's flags attached
#[derive(Debug, Clone, Serialize)]
pub struct StudentEvent {
    #[serde(flatten)]
    pub event: Event,
    #[serde(flatten)]
    pub participation: Participation,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlumniDashboard {
    pub profile: Alumni,
    pub stats: AlumniStats,
}

/// Employment figures across all alumni in the directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlumniStats {
    pub total_alumni: usize,
    pub employed: usize,
    pub employed_percent: u32,
    /// Alumni holding a degree earned after graduating
    pub higher_education: usize,
    /// Alumni whose current position is a founder role
    pub entrepreneurship: usize,
    /// Industry and headcount, largest first
    pub industries: Vec<(String, usize)>,
    pub top_companies: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub profile: Admin,
    pub stats: RegistryStats,
    pub upcoming_events: Vec<EventSummary>,
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Every student, most points first
    pub students: Vec<RosterEntry>,
}

/// One row of the admin's student roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub id: UserId,
    pub name: String,
    pub department: String,
    pub year: u8,
    /// Registry events that list the student as an attendee
    pub events_attended: usize,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl Dashboard {
    /// Build the dashboard matching the role of `user`
    pub fn for_user(user: &User, registry: &EventRegistry, directory: &UserDirectory) -> Self {
        match user {
            User::Student(student) => {
                Dashboard::Student(StudentDashboard::build(student, registry, directory))
            }
            User::Alumni(alumni) => Dashboard::Alumni(AlumniDashboard {
                profile: alumni.clone(),
                stats: AlumniStats::from_directory(directory),
            }),
            User::Admin(admin) => Dashboard::Admin(AdminDashboard {
                profile: admin.clone(),
                stats: registry.stats(),
                upcoming_events: registry
                    .upcoming()
                    .iter()
                    .take(ADMIN_EVENT_LIMIT)
                    .map(|event| registry.summarize(event))
                    .collect(),
                leaderboard: directory.leaderboard(LEADERBOARD_LIMIT),
                students: student_roster(registry, directory),
            }),
        }
    }
}

/// Students with their attendance counted from the registry
pub fn student_roster(registry: &EventRegistry, directory: &UserDirectory) -> Vec<RosterEntry> {
    let events = registry.all();
    let mut roster: Vec<RosterEntry> = directory
        .students()
        .map(|student| RosterEntry {
            id: student.profile.id.clone(),
            name: student.profile.name.clone(),
            department: student.department.clone(),
            year: student.year,
            events_attended: events
                .iter()
                .filter(|e| e.has_attended(&student.profile.id))
                .count(),
            points: student.points,
            profile_picture: student.profile.profile_picture.clone(),
        })
        .collect();

    roster.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
    roster
}

impl StudentDashboard {
    fn build(student: &Student, registry: &EventRegistry, directory: &UserDirectory) -> Self {
        let annotate = |events: Vec<std::sync::Arc<Event>>| -> Vec<StudentEvent> {
            events
                .iter()
                .take(STUDENT_EVENT_LIMIT)
                .map(|event| StudentEvent {
                    event: Event::clone(event),
                    participation: Participation::of(event, &student.profile.id),
                })
                .collect()
        };

        Self {
            profile: student.clone(),
            upcoming_events: annotate(registry.upcoming()),
            past_events: annotate(registry.past()),
            leaderboard: directory.leaderboard(LEADERBOARD_LIMIT),
        }
    }
}

impl AlumniStats {
    /// Alumni with a company on record count as employed
    pub fn from_directory(directory: &UserDirectory) -> Self {
        let alumni: Vec<&Alumni> = directory.alumni().collect();
        let employed = alumni.iter().filter(|a| a.company.is_some()).count();
        let higher_education = alumni
            .iter()
            .filter(|a| a.education.iter().any(|e| e.year > a.graduation_year))
            .count();
        let entrepreneurship = alumni
            .iter()
            .filter(|a| {
                a.current_position
                    .as_deref()
                    .is_some_and(|p| p.to_lowercase().contains("founder"))
            })
            .count();

        let mut by_industry: HashMap<&str, usize> = HashMap::new();
        for industry in alumni.iter().filter_map(|a| a.industry.as_deref()) {
            *by_industry.entry(industry).or_default() += 1;
        }
        let mut industries: Vec<(String, usize)> = by_industry
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        industries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut by_company: HashMap<&str, usize> = HashMap::new();
        for company in alumni.iter().filter_map(|a| a.company.as_deref()) {
            *by_company.entry(company).or_default() += 1;
        }
        let mut companies: Vec<(&str, usize)> = by_company.into_iter().collect();
        companies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        Self {
            total_alumni: alumni.len(),
            employed,
            employed_percent: crate::core::events::percent_of(employed, alumni.len()),
            higher_education,
            entrepreneurship,
            industries,
            top_companies: companies
                .into_iter()
                .take(TOP_COMPANIES_LIMIT)
                .map(|(name, _)| name.to_string())
                .collect(),
        }
    }
}

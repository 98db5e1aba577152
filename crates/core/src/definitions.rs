//! Built-in track ladders, title ladder and level bands.

use crate::catalog::LevelBand;
use crate::id::{Category, TrackId};
use crate::title::TitleRule;
use crate::track::{MilestoneDefinition, TrackDefinition, LADDER_LEN};

/// Points awarded for each rung, index 0 being the unattained baseline.
/// Cumulative totals read 0, 1, 3, 6, 12, 20.
const MILESTONE_POINTS: [u32; LADDER_LEN] = [0, 1, 2, 3, 6, 8];

/// Summary and two example signals for milestones 1 through 5.
type Rungs = [(&'static str, [&'static str; 2]); 5];

fn ladder(rungs: Rungs) -> Vec<MilestoneDefinition> {
    let mut milestones = vec![MilestoneDefinition::new("Not yet demonstrated", MILESTONE_POINTS[0])];
    for (i, (summary, signals)) in rungs.iter().enumerate() {
        let milestone = signals
            .iter()
            .fold(MilestoneDefinition::new(*summary, MILESTONE_POINTS[i + 1]), |m, s| m.with_signal(*s));
        milestones.push(milestone);
    }
    milestones
}

fn track(id: TrackId, name: &str, category: Category, description: &str, rungs: Rungs) -> TrackDefinition {
    TrackDefinition::new(id, name, category, description, ladder(rungs))
}

/// Standard tracks in catalog order; Frontend comes first and is the default focus.
pub(crate) fn standard_tracks() -> Vec<TrackDefinition> {
    vec![
        track(
            TrackId::Frontend,
            "Frontend",
            Category::Building,
            "Develops expertise in web client technologies",
            [
                ("Works effectively within established web client architectures", [
                    "Makes minor modifications to existing screens",
                    "Fixes simple design quality issues",
                ]),
                ("Develops new instances of existing architecture", [
                    "Builds a new page from existing components",
                    "Adds accessibility support to an existing view",
                ]),
                ("Designs major new features and shapes client architecture", [
                    "Designs a client data flow for a new product area",
                    "Leads the migration to a new rendering approach",
                ]),
                ("Deep knowledge of web technologies across the stack", [
                    "Sets performance budgets and enforces them",
                    "Owns the component library roadmap",
                ]),
                ("Industry-leading expertise in web client technologies", [
                    "Invents a technique adopted across the industry",
                    "Speaks externally on client architecture",
                ]),
            ],
        ),
        track(
            TrackId::Backend,
            "Backend",
            Category::Building,
            "Develops expertise in server side engineering",
            [
                ("Works effectively within established server side frameworks", [
                    "Adds a field to an existing endpoint",
                    "Writes a migration following the runbook",
                ]),
                ("Develops new instances of existing architecture", [
                    "Builds a new service from the template",
                    "Adds tracing to an existing request path",
                ]),
                ("Designs standalone systems of moderate complexity", [
                    "Designs a queue-backed processing pipeline",
                    "Defines the storage schema for a new product",
                ]),
                ("Designs complex cross-service systems", [
                    "Leads a multi-region rollout",
                    "Designs the consistency model for a shared store",
                ]),
                ("Sets the long-term server architecture", [
                    "Authors the platform architecture strategy",
                    "Resolves systemic scalability limits",
                ]),
            ],
        ),
        track(
            TrackId::Mobile,
            "Mobile",
            Category::Building,
            "Develops expertise in native mobile platforms",
            [
                ("Works effectively within established mobile architectures", [
                    "Tweaks layout on an existing screen",
                    "Fixes a crash with a clear stack trace",
                ]),
                ("Develops new instances of existing architecture", [
                    "Builds a settings screen from shared components",
                    "Adds offline caching to a list view",
                ]),
                ("Designs major new features for mobile clients", [
                    "Designs navigation for a new app section",
                    "Leads adoption of a new UI toolkit",
                ]),
                ("Deep knowledge of mobile platforms and tooling", [
                    "Cuts cold start time across both platforms",
                    "Owns the release train tooling",
                ]),
                ("Industry-leading expertise in mobile", [
                    "Publishes widely used mobile libraries",
                    "Shapes platform vendor roadmaps",
                ]),
            ],
        ),
        track(
            TrackId::Foundations,
            "Foundations",
            Category::Building,
            "Develops expertise in infrastructure, reliability and data systems",
            [
                ("Works effectively within established infrastructure", [
                    "Follows the deploy checklist",
                    "Responds to alerts with the runbook",
                ]),
                ("Develops new instances of existing infrastructure", [
                    "Adds a new dashboard for a service",
                    "Writes a runbook for a recurring alert",
                ]),
                ("Designs systems for reliability and scale", [
                    "Designs capacity plans for a critical service",
                    "Introduces automated failover",
                ]),
                ("Owns organisation-wide infrastructure", [
                    "Leads incident review practice",
                    "Drives the observability strategy",
                ]),
                ("Sets infrastructure direction for the company", [
                    "Authors the multi-year platform plan",
                    "Negotiates major vendor strategy",
                ]),
            ],
        ),
        track(
            TrackId::ProjectManagement,
            "Project management",
            Category::Executing,
            "Delivers well-scoped programs of work that meet their goals, on time",
            [
                ("Effectively delivers individual tasks", [
                    "Estimates small tasks accurately",
                    "Delivers tightly scoped projects efficiently",
                ]),
                ("Effectively delivers small personal projects", [
                    "Writes effective technical specs",
                    "Identifies dependencies early",
                ]),
                ("Effectively delivers projects through a small team", [
                    "Runs project retrospectives",
                    "Delegates tasks to others appropriately",
                ]),
                ("Effectively delivers projects through a large team", [
                    "Coordinates several teams toward one launch",
                    "Manages risk across a program",
                ]),
                ("Manages major company pushes delivered by multiple teams", [
                    "Plans a company-wide initiative",
                    "Balances competing organisational priorities",
                ]),
            ],
        ),
        track(
            TrackId::Communication,
            "Communication",
            Category::Executing,
            "Shares the right amount of information with the right people, at the right time",
            [
                ("Communicates effectively to close stakeholders", [
                    "Updates the team on progress without prompting",
                    "Asks for help when blocked",
                ]),
                ("Communicates with the wider team appropriately", [
                    "Writes clear design summaries",
                    "Runs effective meetings",
                ]),
                ("Proactively shares information and fosters discussion", [
                    "Publishes decision records",
                    "Resolves disagreement constructively",
                ]),
                ("Communicates complex ideas across the organisation", [
                    "Presents strategy to leadership",
                    "Aligns multiple teams on a shared plan",
                ]),
                ("Influences outcomes at the highest level", [
                    "Shapes company-level narratives",
                    "Represents the company externally",
                ]),
            ],
        ),
        track(
            TrackId::Craft,
            "Craft",
            Category::Executing,
            "Embodies and promotes practices to ensure excellent quality products",
            [
                ("Delivers consistently good quality work", [
                    "Tests new code thoroughly",
                    "Responds to review feedback",
                ]),
                ("Increases the robustness and reliability of code", [
                    "Adds meaningful test coverage to legacy code",
                    "Gives thoughtful code reviews",
                ]),
                ("Improves others' ability to deliver great quality work", [
                    "Introduces lint rules the team adopts",
                    "Mentors others on testing strategy",
                ]),
                ("Advocates for and models great quality practices", [
                    "Defines quality standards for a group",
                    "Drives a reduction in incident rate",
                ]),
                ("Enables and encourages the whole organisation to deliver quality", [
                    "Sets engineering-wide quality goals",
                    "Builds the culture of craftsmanship",
                ]),
            ],
        ),
        track(
            TrackId::Initiative,
            "Initiative",
            Category::Executing,
            "Challenges the status quo and effects positive organisational change",
            [
                ("Identifies opportunities for improvement", [
                    "Raises process issues in retrospectives",
                    "Suggests small workflow changes",
                ]),
                ("Causes change to positively impact a few individuals", [
                    "Automates a manual team chore",
                    "Improves onboarding documentation",
                ]),
                ("Causes change to positively impact an entire team", [
                    "Introduces a new team ritual",
                    "Fixes a long standing pain point",
                ]),
                ("Effects change across several teams", [
                    "Leads a cross-team process change",
                    "Champions a new engineering practice",
                ]),
                ("Effects change across the organisation", [
                    "Reshapes company-wide ways of working",
                    "Secures investment for a strategic bet",
                ]),
            ],
        ),
        track(
            TrackId::CareerDevelopment,
            "Career development",
            Category::Supporting,
            "Provides strategic support to engineers to help them build the career they want",
            [
                ("Gives insight into opportunities and helps identify strengths", [
                    "Shares growth opportunities with peers",
                    "Points out a peer's strengths",
                ]),
                ("Formally supports and advocates for one person", [
                    "Acts as a career mentor",
                    "Writes thoughtful peer feedback",
                ]),
                ("Inspires and retains a small group of people", [
                    "Runs regular growth conversations",
                    "Helps reports reach their goals",
                ]),
                ("Manages interactions and processes between groups", [
                    "Calibrates promotions across teams",
                    "Designs growth paths for a group",
                ]),
                ("Supports the development of a significant part of the organisation", [
                    "Shapes the career framework",
                    "Sponsors leadership development programs",
                ]),
            ],
        ),
        track(
            TrackId::OrgDesign,
            "Org design",
            Category::Supporting,
            "Defines processes and structures that enable the strong growth of the organisation",
            [
                ("Respects and participates in processes", [
                    "Follows team process",
                    "Gives feedback on process friction",
                ]),
                ("Identifies opportunities to improve existing processes", [
                    "Proposes changes to the on-call rotation",
                    "Improves the planning template",
                ]),
                ("Develops processes to solve ongoing organisational problems", [
                    "Creates a new hiring loop",
                    "Defines team charters",
                ]),
                ("Thinks deeply about organisational issues", [
                    "Designs team boundaries for a group",
                    "Runs an org restructure",
                ]),
                ("Leads initiatives to address issues stemming from hypergrowth", [
                    "Plans org structure for the next year",
                    "Defines company-wide operating cadence",
                ]),
            ],
        ),
        track(
            TrackId::Wellbeing,
            "Wellbeing",
            Category::Supporting,
            "Supports the emotional wellbeing of group members in difficult times",
            [
                ("Uses tools and processes to help ensure colleagues are healthy", [
                    "Takes time off to recharge",
                    "Notices when a teammate is struggling",
                ]),
                ("Creates positive, safe environments for others", [
                    "Celebrates teammates' wins",
                    "Models healthy work habits",
                ]),
                ("Manages expectations across peers and reports", [
                    "Shields the team from churn",
                    "Sets sustainable deadlines",
                ]),
                ("Advocates for the needs of teams and group members", [
                    "Escalates burnout risks",
                    "Secures resources for a struggling team",
                ]),
                ("Manages the wellbeing of the organisation", [
                    "Shapes organisation-wide wellbeing policy",
                    "Leads through a major crisis",
                ]),
            ],
        ),
        track(
            TrackId::Accomplishment,
            "Accomplishment",
            Category::Supporting,
            "Inspires day to day excellence and maximises potential",
            [
                ("Helps individuals identify blockers", [
                    "Unblocks a teammate in standup",
                    "Pairs on hard problems",
                ]),
                ("Helps individuals resolve difficult performance issues", [
                    "Gives direct, kind feedback",
                    "Sets clear expectations with a peer",
                ]),
                ("Helps individuals align goals with the team", [
                    "Connects individual goals to team objectives",
                    "Runs effective one-on-ones",
                ]),
                ("Provides stretch opportunities aligned with goals", [
                    "Matches people to growth projects",
                    "Handles underperformance fairly",
                ]),
                ("Creates a culture of accomplishment across the organisation", [
                    "Designs the performance process",
                    "Builds high performing leadership teams",
                ]),
            ],
        ),
        track(
            TrackId::Mentorship,
            "Mentorship",
            Category::Strengthening,
            "Provides support to colleagues and spreads knowledge",
            [
                ("Informally mentors individuals in an ad hoc way", [
                    "Answers questions in review",
                    "Shares useful links",
                ]),
                ("Mentors people proactively", [
                    "Mentors an intern",
                    "Runs a knowledge sharing session",
                ]),
                ("Mentors across teams in an open way", [
                    "Runs a mentorship program for a group",
                    "Writes widely read internal guides",
                ]),
                ("Encourages people to mentor each other", [
                    "Creates a mentorship matching scheme",
                    "Trains new mentors",
                ]),
                ("Instils and promotes a culture of learning", [
                    "Builds the engineering education program",
                    "Sponsors external learning budgets",
                ]),
            ],
        ),
        track(
            TrackId::Evangelism,
            "Evangelism",
            Category::Strengthening,
            "Promotes the team and the company to the outside world",
            [
                ("Represents the team well externally", [
                    "Shares team work on social media",
                    "Attends meetups",
                ]),
                ("Participates more centrally in small events", [
                    "Gives a lightning talk",
                    "Writes a team blog post",
                ]),
                ("Works hard to positively influence public perception", [
                    "Speaks at a regional conference",
                    "Maintains a public open source project",
                ]),
                ("Establishes the company as an exciting place to work", [
                    "Keynotes a major conference",
                    "Builds an external community",
                ]),
                ("Introduces the company to new audiences", [
                    "Leads the engineering brand",
                    "Forms industry partnerships",
                ]),
            ],
        ),
        track(
            TrackId::Recruiting,
            "Recruiting",
            Category::Strengthening,
            "Strengthens the team by bringing in excellent staff members",
            [
                ("Brings new candidates into the pipeline", [
                    "Refers a candidate",
                    "Shares job postings",
                ]),
                ("Interviews regularly and calibrates well", [
                    "Writes thorough interview feedback",
                    "Shadows and reverse-shadows interviews",
                ]),
                ("Maintains and strengthens the integrity of the process", [
                    "Trains new interviewers",
                    "Improves an interview question",
                ]),
                ("Actively contributes to and leads hiring decisions", [
                    "Chairs hiring committees",
                    "Closes senior candidates",
                ]),
                ("Sets recruitment strategy", [
                    "Defines hiring plans for the year",
                    "Designs the company interview process",
                ]),
            ],
        ),
        track(
            TrackId::Community,
            "Community",
            Category::Strengthening,
            "Builds community across the organisation",
            [
                ("Is available and present on current teams", [
                    "Joins team events",
                    "Helps newcomers settle in",
                ]),
                ("Steps in to build relationships across teams", [
                    "Organises a cross-team lunch",
                    "Joins a guild",
                ]),
                ("Contributes to shared community initiatives", [
                    "Runs a guild",
                    "Organises an internal hackathon",
                ]),
                ("Leads community initiatives across the organisation", [
                    "Leads an employee resource group",
                    "Plans the engineering offsite",
                ]),
                ("Creates a culture of belonging across the company", [
                    "Sets diversity and inclusion strategy",
                    "Sponsors company-wide community programs",
                ]),
            ],
        ),
    ]
}

/// Title ladder, most junior first. Management titles require Supporting
/// points on top of the total, individual contributor titles Building points.
pub(crate) fn standard_titles() -> Vec<TitleRule> {
    vec![
        TitleRule::new("Engineer I"),
        TitleRule::new("Engineer II").min_points(17),
        TitleRule::new("Senior Engineer")
            .min_points(36)
            .min_category_points(Category::Building, 12),
        TitleRule::new("Group Lead")
            .min_points(36)
            .min_category_points(Category::Supporting, 12),
        TitleRule::new("Staff Engineer")
            .min_points(58)
            .min_category_points(Category::Building, 24),
        TitleRule::new("Senior Group Lead")
            .min_points(58)
            .min_category_points(Category::Supporting, 24),
        TitleRule::new("Principal Engineer")
            .min_points(90)
            .min_category_points(Category::Building, 36),
        TitleRule::new("Director of Engineering")
            .min_points(90)
            .min_category_points(Category::Supporting, 36)
            .min_milestone(TrackId::OrgDesign, 4),
    ]
}

/// Level bands keyed by the minimum total points.
pub(crate) fn standard_levels() -> Vec<LevelBand> {
    [
        (0, "1.1"),
        (5, "1.2"),
        (11, "1.3"),
        (17, "2.1"),
        (23, "2.2"),
        (29, "2.3"),
        (36, "3.1"),
        (43, "3.2"),
        (50, "3.3"),
        (58, "4.1"),
        (66, "4.2"),
        (74, "4.3"),
        (90, "5.1"),
        (110, "5.2"),
        (135, "5.3"),
    ]
    .into_iter()
    .map(|(points, label)| LevelBand::new(points, label))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::HIGHEST_MILESTONE;

    #[test]
    fn test_every_track_has_full_ladder() {
        for track in standard_tracks() {
            assert_eq!(track.milestones.len(), LADDER_LEN, "{}", track.id);
            assert_eq!(track.points_at(HIGHEST_MILESTONE), 20);
            assert!(track.milestones[1..].iter().all(|m| m.signals.len() == 2));
        }
    }

    #[test]
    fn test_each_category_has_four_tracks() {
        let tracks = standard_tracks();
        for category in Category::ALL {
            assert_eq!(tracks.iter().filter(|t| t.category == category).count(), 4);
        }
    }

    #[test]
    fn test_junior_title_has_no_thresholds() {
        let titles = standard_titles();
        assert_eq!(titles[0].label, "Engineer I");
        assert!(titles[0].thresholds.is_empty());
    }

    #[test]
    fn test_level_bands_ascend_from_zero() {
        let levels = standard_levels();
        assert_eq!(levels[0].min_points, 0);
        assert!(levels.windows(2).all(|w| w[0].min_points < w[1].min_points));
    }
}

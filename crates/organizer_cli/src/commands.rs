//! Subcommands and their execution against a loaded store.

use crate::records::{
    execute_assignment, execute_exam, execute_file, execute_note, execute_project,
    execute_snippet, AssignmentCommand, ExamCommand, FileCommand, NoteCommand, ProjectCommand,
    SnippetCommand,
};
use clap::Subcommand;
use organizer_core::clock::Clock;
use organizer_core::insights::analytics::{analytics, dashboard};
use organizer_core::insights::calendar::{calendar_events, events_on};
use organizer_core::insights::grades::{attendance_percentage, goal_progress, sgpa};
use organizer_core::insights::matrix::{stale_eliminate_candidates, tasks_in_quadrant};
use organizer_core::{
    GoalCategory, HabitCategory, HabitFrequency, KvStore, ModelError, NewCourse, NewGoal,
    OrganizerStore, Priority, Quadrant, Task, Theme, View,
};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Eisenhower-matrix tasks.
    #[command(subcommand)]
    Task(TaskCommand),

    /// Daily and weekly habits.
    #[command(subcommand)]
    Habit(HabitCommand),

    /// Courses, grades and attendance.
    #[command(subcommand)]
    Course(CourseCommand),

    /// Measurable goals.
    #[command(subcommand)]
    Goal(GoalCommand),

    /// Side projects by stage.
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Exam schedule.
    #[command(subcommand)]
    Exam(ExamCommand),

    /// Coursework with due dates.
    #[command(subcommand)]
    Assignment(AssignmentCommand),

    /// Free-form notes.
    #[command(subcommand)]
    Note(NoteCommand),

    /// Saved code snippets.
    #[command(subcommand)]
    Snippet(SnippetCommand),

    /// Folders of links and snippets.
    #[command(subcommand)]
    File(FileCommand),

    /// Log a finished focus session.
    Focus {
        /// Length in minutes
        minutes: u32,

        /// What the session was for
        #[arg(short, long, default_value = "")]
        goal: String,
    },

    /// Show dated events, optionally for one day (YYYY-MM-DD).
    Calendar { date: Option<String> },

    /// Task, habit and focus statistics.
    Stats,

    /// Today's overview.
    Dashboard,

    /// Write every stored key as one JSON object.
    Export {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Restore a previously exported JSON file.
    Import { path: PathBuf },

    /// Delete all stored data.
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },

    /// Display name, theme and last view.
    #[command(subcommand)]
    Profile(ProfileCommand),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Task(_) => "task",
            Self::Habit(_) => "habit",
            Self::Course(_) => "course",
            Self::Goal(_) => "goal",
            Self::Project(_) => "project",
            Self::Exam(_) => "exam",
            Self::Assignment(_) => "assignment",
            Self::Note(_) => "note",
            Self::Snippet(_) => "snippet",
            Self::File(_) => "file",
            Self::Focus { .. } => "focus",
            Self::Calendar { .. } => "calendar",
            Self::Stats => "stats",
            Self::Dashboard => "dashboard",
            Self::Export { .. } => "export",
            Self::Import { .. } => "import",
            Self::Clear { .. } => "clear",
            Self::Profile(_) => "profile",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    Add {
        title: String,

        /// 1=do first, 2=schedule, 3=delegate, 4=eliminate
        #[arg(short, long, default_value = "1")]
        quadrant: Quadrant,

        /// 1 (lowest) to 5 (highest)
        #[arg(short, long, default_value = "3", value_parser = parse_priority)]
        priority: Priority,

        /// Due date, YYYY-MM-DD
        #[arg(short, long)]
        due: Option<String>,

        /// Recurrence label such as `weekly`
        #[arg(short, long)]
        recur: Option<String>,
    },

    /// List tasks, optionally only the open ones in one quadrant.
    List {
        #[arg(short, long)]
        quadrant: Option<Quadrant>,
    },

    /// Toggle completion.
    Done { id: String },

    /// Move a task to another quadrant.
    Move { id: String, quadrant: Quadrant },

    Rm { id: String },

    /// Add a subtask.
    Sub { task_id: String, title: String },

    /// Toggle a subtask.
    SubDone { task_id: String, subtask_id: String },

    /// Remove a subtask.
    SubRm { task_id: String, subtask_id: String },

    /// Quadrant-4 tasks idle for over a week.
    Stale,
}

#[derive(Subcommand, Debug)]
pub enum HabitCommand {
    Add {
        name: String,

        /// academic, health or productivity
        #[arg(short, long, default_value = "academic")]
        category: HabitCategory,

        /// daily or weekly
        #[arg(short, long, default_value = "daily")]
        frequency: HabitFrequency,

        /// Reminder time, HH:mm
        #[arg(long)]
        reminder: Option<String>,

        /// Name of the habit this one follows
        #[arg(long)]
        after: Option<String>,
    },

    List,

    /// Check or uncheck today.
    Check { id: String },

    Rm { id: String },
}

#[derive(Subcommand, Debug)]
pub enum CourseCommand {
    Add {
        code: String,
        name: String,

        #[arg(short, long, default_value = "")]
        semester: String,

        #[arg(short, long, default_value_t = 3.0)]
        credits: f64,

        #[arg(short, long)]
        grade: Option<String>,
    },

    List,

    /// Set a letter grade; an empty string clears it.
    Grade { id: String, grade: String },

    /// Record one class as attended, or missed with --absent.
    Attend {
        id: String,

        #[arg(long)]
        absent: bool,
    },

    Rm { id: String },

    /// Credit-weighted grade point average.
    Sgpa,
}

#[derive(Subcommand, Debug)]
pub enum GoalCommand {
    Add {
        title: String,
        target: f64,

        #[arg(short, long, default_value = "")]
        unit: String,

        /// Deadline, YYYY-MM-DD
        #[arg(short, long, default_value = "")]
        deadline: String,

        /// academic, skill, project or personal
        #[arg(short, long, default_value = "personal")]
        category: GoalCategory,
    },

    List,

    /// Set the current amount.
    Progress { id: String, current: f64 },

    Rm { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    Show,

    /// Set the display name.
    Name { name: String },

    /// Set the theme, or toggle it when omitted.
    Theme { theme: Option<Theme> },

    /// Remember the section to open next time.
    View { view: View },
}

fn parse_priority(value: &str) -> Result<Priority, ModelError> {
    let parsed = value
        .trim()
        .parse::<u8>()
        .map_err(|_| ModelError::UnknownVariant {
            field: "priority",
            value: value.to_string(),
        })?;
    Priority::new(parsed)
}

pub(crate) fn require(found: bool, kind: &str, id: &str) -> Result<(), String> {
    if found {
        Ok(())
    } else {
        Err(format!("no {kind} with id `{id}`"))
    }
}

pub fn execute<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: Command,
) -> Result<(), String> {
    match command {
        Command::Task(command) => execute_task(store, command),
        Command::Habit(command) => execute_habit(store, command),
        Command::Course(command) => execute_course(store, command),
        Command::Goal(command) => execute_goal(store, command),
        Command::Project(command) => execute_project(store, command),
        Command::Exam(command) => execute_exam(store, command),
        Command::Assignment(command) => execute_assignment(store, command),
        Command::Note(command) => execute_note(store, command),
        Command::Snippet(command) => execute_snippet(store, command),
        Command::File(command) => execute_file(store, command),
        Command::Focus { minutes, goal } => {
            let session = store.add_focus_session(minutes, goal);
            println!("logged {} min focus session {}", session.duration, session.id);
            Ok(())
        }
        Command::Calendar { date } => {
            let events = calendar_events(
                store.exams(),
                store.assignments(),
                store.goals(),
                store.tasks(),
            );
            let shown: Vec<_> = match date.as_deref() {
                Some(date) => events_on(&events, date),
                None => events.iter().collect(),
            };
            for event in shown {
                println!("{}  {}", event.date, event.title);
            }
            Ok(())
        }
        Command::Stats => {
            let stats = analytics(store.tasks(), store.habits(), store.focus_sessions());
            println!(
                "tasks: {} total, {} done, {} pending ({}% complete)",
                stats.total_tasks, stats.completed_tasks, stats.pending_tasks, stats.completion_rate
            );
            println!("quadrants: {:?}", stats.quadrant_counts);
            println!("average habit streak: {}", stats.average_streak);
            for (category, count) in &stats.habits_by_category {
                println!("  {category:?}: {count}");
            }
            println!(
                "focus: {} sessions, {}h total, {} min average",
                stats.focus_sessions, stats.focus_hours, stats.average_session_minutes
            );
            Ok(())
        }
        Command::Dashboard => {
            let today = store.clock().today();
            let view = dashboard(
                store.tasks(),
                store.habits(),
                store.courses(),
                store.exams(),
                today,
            );
            println!("pending tasks: {}", view.pending_tasks);
            println!("do first: {}", view.pending_do_first);
            for task in &view.top_priority {
                println!("  ! {}", task.title);
            }
            if let Some(habit) = view.top_habit {
                println!("top habit: {} ({})", habit.name, habit.streak);
            }
            println!("sgpa: {}", view.grades.display());
            println!("upcoming exams: {}", view.upcoming_exams);
            Ok(())
        }
        Command::Export { output } => {
            let payload = store.export_backup().map_err(|err| err.to_string())?;
            match output {
                Some(path) => std::fs::write(&path, payload)
                    .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
                None => {
                    println!("{payload}");
                    Ok(())
                }
            }
        }
        Command::Import { path } => {
            let payload = std::fs::read_to_string(&path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            let summary = store.import_backup(&payload).map_err(|err| err.to_string())?;
            println!(
                "imported {} keys, skipped {}",
                summary.written, summary.skipped
            );
            Ok(())
        }
        Command::Clear { yes } => {
            if !yes {
                return Err("refusing to delete all data without --yes".to_string());
            }
            let removed = store.clear_all().map_err(|err| err.to_string())?;
            println!("cleared {removed} keys");
            Ok(())
        }
        Command::Profile(command) => execute_profile(store, command),
    }
}

fn execute_task<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: TaskCommand,
) -> Result<(), String> {
    match command {
        TaskCommand::Add {
            title,
            quadrant,
            priority,
            due,
            recur,
        } => {
            let task = store.add_task(title, quadrant, priority, due);
            if recur.is_some() {
                store.set_task_recurrence(&task.id, recur);
            }
            println!("{}", task.id);
            Ok(())
        }
        TaskCommand::List { quadrant } => {
            let tasks: Vec<&Task> = match quadrant {
                Some(quadrant) => tasks_in_quadrant(store.tasks(), quadrant),
                None => store.tasks().iter().collect(),
            };
            for task in tasks {
                print_task(task);
            }
            Ok(())
        }
        TaskCommand::Done { id } => require(store.toggle_task(&id), "task", &id),
        TaskCommand::Move { id, quadrant } => {
            require(store.update_task_quadrant(&id, quadrant), "task", &id)
        }
        TaskCommand::Rm { id } => require(store.delete_task(&id), "task", &id),
        TaskCommand::Sub { task_id, title } => match store.add_subtask(&task_id, title) {
            Some(subtask) => {
                println!("{}", subtask.id);
                Ok(())
            }
            None => require(false, "task", &task_id),
        },
        TaskCommand::SubDone {
            task_id,
            subtask_id,
        } => require(
            store.toggle_subtask(&task_id, &subtask_id),
            "subtask",
            &subtask_id,
        ),
        TaskCommand::SubRm {
            task_id,
            subtask_id,
        } => require(
            store.delete_subtask(&task_id, &subtask_id),
            "subtask",
            &subtask_id,
        ),
        TaskCommand::Stale => {
            let now = store.clock().now();
            for task in stale_eliminate_candidates(store.tasks(), now) {
                print_task(task);
            }
            Ok(())
        }
    }
}

fn print_task(task: &Task) {
    let mark = if task.completed { "x" } else { " " };
    let (done, total) = task.subtask_progress();
    let mut line = format!(
        "[{mark}] {}  {}  Q{} P{}",
        task.id,
        task.title,
        task.quadrant.get(),
        task.priority.get()
    );
    if let Some(due) = &task.due_date {
        line.push_str(&format!("  due {due}"));
    }
    if total > 0 {
        line.push_str(&format!("  {done}/{total}"));
    }
    if let Some(recurrence) = &task.recurrence {
        line.push_str(&format!("  ({recurrence})"));
    }
    println!("{line}");
}

fn execute_habit<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: HabitCommand,
) -> Result<(), String> {
    match command {
        HabitCommand::Add {
            name,
            category,
            frequency,
            reminder,
            after,
        } => {
            let habit = store.add_habit(name, category, frequency, reminder, after);
            println!("{}", habit.id);
            Ok(())
        }
        HabitCommand::List => {
            let today = store.clock().today_string();
            for habit in store.habits() {
                let mark = if habit.is_done_on(&today) { "x" } else { " " };
                let mut line = format!(
                    "[{mark}] {}  {}  {:?}  streak {}",
                    habit.id, habit.name, habit.category, habit.streak
                );
                if let Some(previous) = store.chained_after(habit) {
                    line.push_str(&format!("  after {}", previous.name));
                }
                println!("{line}");
            }
            Ok(())
        }
        HabitCommand::Check { id } => require(store.toggle_habit_for_today(&id), "habit", &id),
        HabitCommand::Rm { id } => require(store.delete_habit(&id), "habit", &id),
    }
}

fn execute_course<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: CourseCommand,
) -> Result<(), String> {
    match command {
        CourseCommand::Add {
            code,
            name,
            semester,
            credits,
            grade,
        } => {
            let course = store.add_course(NewCourse {
                code,
                name,
                semester,
                credits,
                color: None,
                grade,
            });
            println!("{}", course.id);
            Ok(())
        }
        CourseCommand::List => {
            for course in store.courses() {
                println!(
                    "{}  {} {}  {} cr  grade {}  attendance {}%",
                    course.id,
                    course.code,
                    course.name,
                    course.credits,
                    course.grade.as_deref().unwrap_or("-"),
                    attendance_percentage(course)
                );
            }
            Ok(())
        }
        CourseCommand::Grade { id, grade } => {
            require(store.update_course_grade(&id, grade), "course", &id)
        }
        CourseCommand::Attend { id, absent } => {
            require(store.record_attendance(&id, !absent), "course", &id)
        }
        CourseCommand::Rm { id } => require(store.delete_course(&id), "course", &id),
        CourseCommand::Sgpa => {
            let summary = sgpa(store.courses());
            println!(
                "sgpa {} over {} credits ({} graded courses)",
                summary.display(),
                summary.total_credits,
                summary.graded_courses
            );
            Ok(())
        }
    }
}

fn execute_goal<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: GoalCommand,
) -> Result<(), String> {
    match command {
        GoalCommand::Add {
            title,
            target,
            unit,
            deadline,
            category,
        } => {
            let goal = store.add_goal(NewGoal {
                title,
                target,
                unit,
                deadline,
                category,
            });
            println!("{}", goal.id);
            Ok(())
        }
        GoalCommand::List => {
            for goal in store.goals() {
                println!(
                    "{}  {}  {}/{} {}  {}%",
                    goal.id,
                    goal.title,
                    goal.current,
                    goal.target,
                    goal.unit,
                    goal_progress(goal)
                );
            }
            Ok(())
        }
        GoalCommand::Progress { id, current } => {
            require(store.update_goal_progress(&id, current), "goal", &id)
        }
        GoalCommand::Rm { id } => require(store.delete_goal(&id), "goal", &id),
    }
}

fn execute_profile<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: ProfileCommand,
) -> Result<(), String> {
    let mut prefs = store.preferences();
    match command {
        ProfileCommand::Show => {
            let name = prefs.username().map_err(|err| err.to_string())?;
            let theme = prefs.theme().map_err(|err| err.to_string())?;
            let view = prefs.last_view().map_err(|err| err.to_string())?;
            println!("name: {}", name.as_deref().unwrap_or("-"));
            println!("theme: {}", theme.as_str());
            println!("last view: {view}");
            Ok(())
        }
        ProfileCommand::Name { name } => {
            let saved = prefs.set_username(&name).map_err(|err| err.to_string())?;
            if saved {
                Ok(())
            } else {
                Err("name must not be blank".to_string())
            }
        }
        ProfileCommand::Theme { theme } => {
            let applied = match theme {
                Some(theme) => prefs.set_theme(theme).map(|()| theme),
                None => prefs.toggle_theme(),
            }
            .map_err(|err| err.to_string())?;
            println!("theme: {}", applied.as_str());
            Ok(())
        }
        ProfileCommand::View { view } => prefs.set_last_view(view).map_err(|err| err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{execute, Command, CourseCommand, ProfileCommand, TaskCommand};
    use chrono::NaiveDate;
    use organizer_core::{FixedClock, MemoryKvStore, OrganizerStore, Priority, Quadrant, Theme};

    fn loaded_store() -> OrganizerStore<MemoryKvStore, FixedClock> {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        let mut store = OrganizerStore::with_clock(MemoryKvStore::new(), clock);
        store.load();
        store
    }

    #[test]
    fn task_add_with_recurrence_sets_label() {
        let mut store = loaded_store();
        let command = Command::Task(TaskCommand::Add {
            title: "Review".to_string(),
            quadrant: Quadrant::SCHEDULE,
            priority: Priority::new(4).unwrap(),
            due: None,
            recur: Some("weekly".to_string()),
        });
        execute(&mut store, command).unwrap();

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].recurrence.as_deref(), Some("weekly"));
    }

    #[test]
    fn subtask_can_be_removed() {
        let mut store = loaded_store();
        let task = store.add_task("Report", Quadrant::DO_FIRST, Priority::DEFAULT, None);
        let subtask = store.add_subtask(&task.id, "Outline".to_string()).unwrap();
        let remove = |store: &mut OrganizerStore<MemoryKvStore, FixedClock>| {
            execute(
                store,
                Command::Task(TaskCommand::SubRm {
                    task_id: task.id.clone(),
                    subtask_id: subtask.id.clone(),
                }),
            )
        };

        remove(&mut store).unwrap();
        assert_eq!(store.tasks()[0].subtask_progress(), (0, 0));
        assert!(remove(&mut store).unwrap_err().contains("subtask"));
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut store = loaded_store();
        let err = execute(
            &mut store,
            Command::Course(CourseCommand::Attend {
                id: "missing".to_string(),
                absent: false,
            }),
        )
        .unwrap_err();
        assert!(err.contains("missing"));
    }

    #[test]
    fn clear_requires_confirmation() {
        let mut store = loaded_store();
        assert!(execute(&mut store, Command::Clear { yes: false }).is_err());
        execute(&mut store, Command::Clear { yes: true }).unwrap();
    }

    #[test]
    fn theme_toggles_when_omitted() {
        let mut store = loaded_store();
        execute(&mut store, Command::Profile(ProfileCommand::Theme { theme: None })).unwrap();
        assert_eq!(store.preferences().theme().unwrap(), Theme::Dark);
    }

    #[test]
    fn priority_parser_rejects_out_of_range() {
        assert!(super::parse_priority("6").is_err());
        assert_eq!(super::parse_priority(" 5 ").unwrap().get(), 5);
    }
}

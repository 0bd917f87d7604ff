//! Subcommands for the remaining record collections: projects, exams,
//! assignments, notes, code snippets, folders and files.

use crate::commands::require;
use clap::Subcommand;
use organizer_core::clock::Clock;
use organizer_core::insights::matrix::{exams_by_date, pending_assignments_by_due};
use organizer_core::insights::tree::{files_in, folder_children, folder_path};
use organizer_core::model::split_list;
use organizer_core::{
    Assignment, AssignmentStatus, FileKind, KvStore, NewAssignment, NewCodeSnippet, NewExam,
    NewNote, NewProject, OrganizerStore, ProjectStatus,
};

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    Add {
        name: String,

        /// idea, planning, development, testing or done
        #[arg(short, long, default_value = "idea")]
        status: ProjectStatus,

        /// Comma-separated technologies
        #[arg(long, default_value = "")]
        stack: String,

        /// Deadline, YYYY-MM-DD
        #[arg(short, long)]
        deadline: Option<String>,

        #[arg(long, default_value = "")]
        description: String,
    },

    List,

    /// Move a project to another stage.
    Status { id: String, status: ProjectStatus },

    Rm { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ExamCommand {
    Add {
        name: String,
        course_name: String,

        /// Exam date, YYYY-MM-DD
        date: String,

        #[arg(short, long, default_value = "")]
        syllabus: String,
    },

    /// Exams, earliest first.
    List,

    Rm { id: String },
}

#[derive(Subcommand, Debug)]
pub enum AssignmentCommand {
    Add {
        title: String,
        course_id: String,

        /// Due date, YYYY-MM-DD
        due: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Pending assignments, earliest due first; --all lists every one.
    List {
        #[arg(long)]
        all: bool,
    },

    /// pending, submitted or graded
    Status { id: String, status: AssignmentStatus },

    Rm { id: String },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        content: String,

        #[arg(long, default_value = "General")]
        category: String,

        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,

        #[arg(long, default_value = "bg-yellow-100")]
        color: String,
    },

    /// List notes, optionally those tagged or filed under one label.
    List {
        #[arg(short, long)]
        label: Option<String>,
    },

    Rm { id: String },
}

#[derive(Subcommand, Debug)]
pub enum SnippetCommand {
    Add {
        title: String,
        language: String,
        code: String,

        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,
    },

    List,

    Rm { id: String },
}

#[derive(Subcommand, Debug)]
pub enum FileCommand {
    /// Create a folder, at the root unless --parent is given.
    Mkdir {
        name: String,

        #[arg(short, long)]
        parent: Option<String>,
    },

    /// Delete a folder and the files directly inside it.
    Rmdir { id: String },

    /// Save a link or snippet.
    Add {
        name: String,
        content: String,

        /// link or snippet
        #[arg(short, long, default_value = "link")]
        kind: FileKind,

        #[arg(short, long)]
        folder: Option<String>,
    },

    Rm { id: String },

    /// Show one folder level, the root when no folder is given.
    Ls { folder: Option<String> },
}

pub fn execute_project<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: ProjectCommand,
) -> Result<(), String> {
    match command {
        ProjectCommand::Add {
            name,
            status,
            stack,
            deadline,
            description,
        } => {
            let project = store.add_project(NewProject {
                name,
                status,
                tech_stack: split_list(&stack),
                deadline,
                description,
            });
            println!("{}", project.id);
            Ok(())
        }
        ProjectCommand::List => {
            for project in store.projects() {
                println!(
                    "{}  {}  {:?}  [{}]  {}",
                    project.id,
                    project.name,
                    project.status,
                    project.tech_stack.join(", "),
                    project.deadline.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }
        ProjectCommand::Status { id, status } => {
            require(store.update_project_status(&id, status), "project", &id)
        }
        ProjectCommand::Rm { id } => require(store.delete_project(&id), "project", &id),
    }
}

pub fn execute_exam<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: ExamCommand,
) -> Result<(), String> {
    match command {
        ExamCommand::Add {
            name,
            course_name,
            date,
            syllabus,
        } => {
            let exam = store.add_exam(NewExam {
                name,
                course_name,
                date,
                syllabus,
            });
            println!("{}", exam.id);
            Ok(())
        }
        ExamCommand::List => {
            for exam in exams_by_date(store.exams()) {
                let mark = if exam.completed { "x" } else { " " };
                println!(
                    "[{mark}] {}  {}  {}  {}",
                    exam.id, exam.date, exam.course_name, exam.name
                );
            }
            Ok(())
        }
        ExamCommand::Rm { id } => require(store.delete_exam(&id), "exam", &id),
    }
}

pub fn execute_assignment<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: AssignmentCommand,
) -> Result<(), String> {
    match command {
        AssignmentCommand::Add {
            title,
            course_id,
            due,
            description,
        } => {
            let assignment = store.add_assignment(NewAssignment {
                title,
                course_id,
                due_date: due,
                description,
            });
            println!("{}", assignment.id);
            Ok(())
        }
        AssignmentCommand::List { all } => {
            let assignments: Vec<&Assignment> = if all {
                store.assignments().iter().collect()
            } else {
                pending_assignments_by_due(store.assignments())
            };
            for assignment in assignments {
                println!(
                    "{}  {}  {}  {}  {:?}",
                    assignment.id,
                    assignment.due_date,
                    store.assignment_course_name(assignment),
                    assignment.title,
                    assignment.status
                );
            }
            Ok(())
        }
        AssignmentCommand::Status { id, status } => require(
            store.update_assignment_status(&id, status),
            "assignment",
            &id,
        ),
        AssignmentCommand::Rm { id } => {
            require(store.delete_assignment(&id), "assignment", &id)
        }
    }
}

pub fn execute_note<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: NoteCommand,
) -> Result<(), String> {
    match command {
        NoteCommand::Add {
            title,
            content,
            category,
            tags,
            color,
        } => {
            let note = store.add_note(NewNote {
                title,
                content,
                category,
                tags: split_list(&tags),
                color,
            });
            println!("{}", note.id);
            Ok(())
        }
        NoteCommand::List { label } => {
            let notes = store
                .notes()
                .iter()
                .filter(|note| label.as_deref().map_or(true, |label| note.matches_label(label)));
            for note in notes {
                println!(
                    "{}  {}  [{}]  {}",
                    note.id,
                    note.title,
                    note.category,
                    note.tags.join(", ")
                );
            }
            Ok(())
        }
        NoteCommand::Rm { id } => require(store.delete_note(&id), "note", &id),
    }
}

pub fn execute_snippet<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: SnippetCommand,
) -> Result<(), String> {
    match command {
        SnippetCommand::Add {
            title,
            language,
            code,
            tags,
        } => {
            let snippet = store.add_code_snippet(NewCodeSnippet {
                title,
                language,
                code,
                tags: split_list(&tags),
            });
            println!("{}", snippet.id);
            Ok(())
        }
        SnippetCommand::List => {
            for snippet in store.code_snippets() {
                println!("{}  {}  ({})", snippet.id, snippet.title, snippet.language);
            }
            Ok(())
        }
        SnippetCommand::Rm { id } => require(store.delete_code_snippet(&id), "snippet", &id),
    }
}

pub fn execute_file<K: KvStore, C: Clock>(
    store: &mut OrganizerStore<K, C>,
    command: FileCommand,
) -> Result<(), String> {
    match command {
        FileCommand::Mkdir { name, parent } => {
            let folder = store.add_folder(name, parent);
            println!("{}", folder.id);
            Ok(())
        }
        FileCommand::Rmdir { id } => require(store.delete_folder(&id), "folder", &id),
        FileCommand::Add {
            name,
            content,
            kind,
            folder,
        } => {
            let file = store.add_file(name, kind, content, folder);
            println!("{}", file.id);
            Ok(())
        }
        FileCommand::Rm { id } => require(store.delete_file(&id), "file", &id),
        FileCommand::Ls { folder } => {
            let folder_id = folder.as_deref();
            if let Some(id) = folder_id {
                let path = folder_path(store.folders(), id);
                if path.is_empty() {
                    return require(false, "folder", id);
                }
                let names: Vec<&str> = path.iter().map(|folder| folder.name.as_str()).collect();
                println!("/{}", names.join("/"));
            } else {
                println!("/");
            }
            for child in folder_children(store.folders(), folder_id) {
                println!("  {}/  {}", child.name, child.id);
            }
            for file in files_in(store.files(), folder_id) {
                println!("  {}  {:?}  {}", file.name, file.kind, file.id);
            }
            Ok(())
        }
    }
}

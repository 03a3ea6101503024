use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use lesson_filter::{editor_list, viewer_list};
use log::debug;
use sevenedu_client::lesson::LessonPatch;
use sevenedu_client::users::{Subscription, User};
use sevenedu_client::{ApiToken, Client};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

mod config;

#[derive(Parser, Debug)]
#[command(about = "Staff tooling for the SevenEdu course platform", long_about = None)]
struct Cli {
    /// Log more; repeat for debug output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a fresh config file holding the given API token
    Init { token: String },

    /// List all course categories
    Courses,

    /// List a course's lessons, as a student would see them
    Lessons {
        course_id: String,

        /// Include hidden lessons (the editing view)
        #[arg(long)]
        all: bool,
    },

    /// List users, or look one up by email
    Users {
        #[arg(long)]
        email: Option<String>,
    },

    /// Enrol a user onto a course by email
    Assign {
        email: String,
        course_id: String,

        /// Bill monthly instead of one full charge
        #[arg(long)]
        monthly: bool,
    },

    /// Change a lesson's title
    Rename { lesson_id: String, title: String },

    /// Make a lesson visible to students
    Publish { lesson_id: String },

    /// Hide a lesson from students
    Unpublish { lesson_id: String },

    /// Remove a lesson from its course
    DeleteLesson { lesson_id: String },

    /// Remove a whole course category
    DeleteCourse { course_id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    match cli.command {
        Commands::Init { token } => {
            let config = Config::new(ApiToken::from(token));
            config.save()?;
            println!("config written");
            Ok(())
        }
        command => {
            let config = Config::load()?;
            let client = match &config.base_url {
                Some(base) => Client::with_base(config.token.clone(), base.clone()),
                None => Client::new(config.token.clone()),
            };
            run(command, &config, &client)
        }
    }
}

fn run(command: Commands, config: &Config, client: &Client) -> Result<()> {
    match command {
        Commands::Init { .. } => unreachable!("handled in main"),

        Commands::Courses => {
            for course in client.all_courses()? {
                let visible = course.lessons.iter().filter(|l| l.is_visible).count();
                println!(
                    "{}  {}  ({}/{} lessons visible)",
                    course.id,
                    course.title,
                    visible,
                    course.lessons.len()
                );
            }
        }

        Commands::Lessons { course_id, all } => {
            let raw = client.course_lessons(&course_id)?;
            debug!("backend returned {} lessons for {}", raw.len(), course_id);
            if all {
                // Editing view: hidden lessons stay listed, marked with *.
                for (i, lesson) in editor_list(&config.overrides, &course_id, &raw)
                    .iter()
                    .enumerate()
                {
                    let marker = if lesson.is_visible { ' ' } else { '*' };
                    println!("{:>3}{} {}  ({})", i + 1, marker, lesson.title, lesson.id);
                }
            } else {
                for (i, lesson) in viewer_list(&config.overrides, &course_id, &raw)
                    .iter()
                    .enumerate()
                {
                    println!("{:>3}  {}  ({})", i + 1, lesson.title, lesson.id);
                }
            }
        }

        Commands::Users { email } => match email {
            Some(email) => print_user(&client.user_by_email(&email)?),
            None => {
                for user in client.all_users()? {
                    println!(
                        "{}  {}  {}",
                        user.id,
                        user.email,
                        user.name.as_deref().unwrap_or("-")
                    );
                }
            }
        },

        Commands::Assign {
            email,
            course_id,
            monthly,
        } => {
            let subscription = if monthly {
                Subscription::Monthly
            } else {
                Subscription::FullCharge
            };
            client.assign_course(&email, &course_id, subscription)?;
            println!("{} enrolled on {}", email, course_id);
        }

        Commands::Rename { lesson_id, title } => {
            client.update_lesson(
                &lesson_id,
                &LessonPatch {
                    title: Some(title),
                    ..Default::default()
                },
            )?;
            println!("{} renamed", lesson_id);
        }

        Commands::Publish { lesson_id } => {
            client.update_lesson(
                &lesson_id,
                &LessonPatch {
                    is_visible: Some(true),
                    ..Default::default()
                },
            )?;
            println!("{} published", lesson_id);
        }

        Commands::Unpublish { lesson_id } => {
            client.update_lesson(
                &lesson_id,
                &LessonPatch {
                    is_visible: Some(false),
                    ..Default::default()
                },
            )?;
            println!("{} hidden", lesson_id);
        }

        Commands::DeleteLesson { lesson_id } => {
            client.delete_lesson(&lesson_id)?;
            println!("{} deleted", lesson_id);
        }

        Commands::DeleteCourse { course_id } => {
            client.delete_course(&course_id)?;
            println!("{} deleted", course_id);
        }
    }

    Ok(())
}

fn print_user(user: &User) {
    println!("{}  {}", user.id, user.email);
    if let Some(name) = &user.name {
        println!("name: {}", name);
    }
    if let Some(coins) = user.coins {
        println!("coins: {}", coins);
    }
    println!("verified: {}", user.is_verified);

    if !user.courses.is_empty() {
        println!("courses:");
        for enrollment in &user.courses {
            let status = if enrollment.is_finished {
                "finished"
            } else {
                "in progress"
            };
            println!("  {}  ({})", enrollment.course_id, status);
        }
    }

    if !user.showed_lesson.is_empty() {
        println!("recently watched:");
        for progress in user.showed_lesson.iter().take(5) {
            println!("  {}  at {}", progress.lesson_id, progress.watched_at);
        }
    }
}

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use rolo_core::{
    bottom_nav_items, default_config_json, project_mobile, AppAction, AppReconciler, AppState,
    AppUpdate, FfiApp, NavTab, ProfileField,
};

#[derive(Debug, Parser)]
#[command(name = "rolo-cli")]
#[command(about = "Headless driver for the rolo profile core")]
struct Cli {
    /// State directory (rolo_config.json and logs live here)
    #[arg(long, default_value = ".rolo-cli")]
    state_dir: PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the bottom navigation route table
    Routes,

    /// Print the default rolo_config.json payload
    Config,

    /// Fill the profile form, submit it, and print the resulting display state
    Submit {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        age: String,

        #[arg(long, default_value = "Male")]
        gender: String,

        /// Hobby labels to toggle on (repeatable)
        #[arg(long)]
        hobby: Vec<String>,

        #[arg(long)]
        notifications: bool,
    },

    /// Scripted walkthrough of the three screens, printing every update
    Demo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    std::fs::create_dir_all(&cli.state_dir)
        .with_context(|| format!("create state dir {}", cli.state_dir.display()))?;

    match &cli.cmd {
        Command::Routes => cmd_routes(),
        Command::Config => {
            println!("{}", default_config_json());
            Ok(())
        }
        Command::Submit {
            name,
            email,
            phone,
            age,
            gender,
            hobby,
            notifications,
        } => cmd_submit(&cli, name, email, phone, age, gender, hobby, *notifications),
        Command::Demo => cmd_demo(&cli),
    }
}

fn cmd_routes() -> anyhow::Result<()> {
    for item in bottom_nav_items() {
        println!("{:<8} {}", item.label, item.route);
    }
    Ok(())
}

fn start_app(cli: &Cli) -> Arc<FfiApp> {
    FfiApp::new(cli.state_dir.to_string_lossy().into_owned())
}

/// Poll `state()` until the predicate holds; the core applies actions on its
/// own actor thread.
fn wait_for(
    app: &FfiApp,
    what: &str,
    mut pred: impl FnMut(&AppState) -> bool,
) -> anyhow::Result<AppState> {
    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(5) {
        let state = app.state();
        if pred(&state) {
            return Ok(state);
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    bail!("{what}: condition not met");
}

#[allow(clippy::too_many_arguments)]
fn cmd_submit(
    cli: &Cli,
    name: &str,
    email: &str,
    phone: &str,
    age: &str,
    gender: &str,
    hobbies: &[String],
    notifications: bool,
) -> anyhow::Result<()> {
    let app = start_app(cli);

    app.dispatch(AppAction::SelectTab {
        tab: NavTab::Profile,
    });
    for (field, value) in [
        (ProfileField::Name, name),
        (ProfileField::Email, email),
        (ProfileField::Phone, phone),
        (ProfileField::Age, age),
    ] {
        app.dispatch(AppAction::SetField {
            field,
            value: value.to_string(),
        });
    }
    app.dispatch(AppAction::SelectGender {
        gender: gender.to_string(),
    });
    for label in hobbies {
        app.dispatch(AppAction::ToggleHobby {
            label: label.clone(),
        });
    }
    app.dispatch(AppAction::SetNotificationsEnabled {
        enabled: notifications,
    });
    app.dispatch(AppAction::SubmitProfile);

    let state = wait_for(&app, "display screen", |s| s.profile_view.is_some())?;
    let route = project_mobile(&state);
    let view = state.profile_view.as_ref().expect("display state");

    println!("route:  {}", route.active_path);
    println!("name:   {}", view.profile.name);
    println!("email:  {}", view.profile.email);
    println!("phone:  {}", view.profile.phone);
    println!("age:    {}", view.profile.age);
    println!("gender: {}", view.profile.gender);
    if !hobbies.is_empty() || notifications {
        // The route carries only the five scalar fields.
        println!("(hobbies/notifications are not part of the display route)");
    }
    Ok(())
}

struct PrintReconciler;

impl AppReconciler for PrintReconciler {
    fn reconcile(&self, update: AppUpdate) {
        match update {
            AppUpdate::FullState(state) => {
                let route = project_mobile(&state);
                let toast = state.toast.as_deref().unwrap_or("-");
                println!(
                    "rev {:>3}  {}  toast: {}",
                    state.rev, route.active_path, toast
                );
            }
            other => println!("rev {:>3}  {:?}", other.rev(), other),
        }
    }
}

fn cmd_demo(cli: &Cli) -> anyhow::Result<()> {
    let app = start_app(cli);
    app.listen_for_updates(Box::new(PrintReconciler));

    app.dispatch(AppAction::SelectTab {
        tab: NavTab::Profile,
    });
    app.dispatch(AppAction::SetField {
        field: ProfileField::Name,
        value: "Ann Lee".into(),
    });
    app.dispatch(AppAction::SetField {
        field: ProfileField::Email,
        value: "a@b.com".into(),
    });
    app.dispatch(AppAction::SelectGender {
        gender: "Female".into(),
    });
    app.dispatch(AppAction::SubmitProfile);
    wait_for(&app, "display screen", |s| s.profile_view.is_some())?;

    app.dispatch(AppAction::ToggleFavorite);
    wait_for(&app, "favorite toast", |s| s.toast.is_some())?;
    app.dispatch(AppAction::ClearToast);

    app.dispatch(AppAction::OpenProfileOptions);
    app.dispatch(AppAction::DeleteProfile);
    wait_for(&app, "delete toast", |s| s.toast.is_some())?;
    app.dispatch(AppAction::ClearToast);

    app.dispatch(AppAction::SelectTab { tab: NavTab::Home });
    wait_for(&app, "home root", |s| s.profile_view.is_none())?;

    // Let the printer thread drain the last updates before exiting.
    std::thread::sleep(Duration::from_millis(100));
    Ok(())
}

use clap::{Args, Parser, Subcommand};

use little_lemon::menu::services::refresh_menu;
use little_lemon::navigation::{Navigator, Route, Shell};
use little_lemon::profile::validation::format_us_phone;
use little_lemon::screens::profile::ProfileScreenError;
use little_lemon::screens::{HomeScreen, HomeStatus, OnboardingScreen, ProfileScreen};
use little_lemon::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "little-lemon", about = "Little Lemon restaurant menu and profile")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the screen the app would open on.
    Route,
    /// Complete onboarding.
    Onboard {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// List the menu, optionally filtered.
    Menu {
        #[arg(long)]
        search: Option<String>,
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// List menu categories.
    Categories,
    /// Fetch the menu again and replace the local copy.
    Reload,
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Clear the profile and return to onboarding.
    Logout,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Show,
    Set(ProfileEdits),
    RemoveAvatar,
}

#[derive(Debug, Args)]
pub struct ProfileEdits {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    avatar: Option<String>,
    #[arg(long)]
    order_statuses: Option<bool>,
    #[arg(long)]
    password_changes: Option<bool>,
    #[arg(long)]
    special_offers: Option<bool>,
    #[arg(long)]
    newsletter: Option<bool>,
}

pub async fn run(cli: Cli, state: AppState) -> anyhow::Result<()> {
    let Shell::Ready(mut nav) = Shell::boot(state.kv.as_ref()).await else {
        anyhow::bail!("app failed to start");
    };

    match cli.command {
        Command::Route => println!("{:?}", nav.current()),
        Command::Onboard { name, email } => {
            let mut screen = OnboardingScreen::new();
            screen.name = name;
            screen.email = email;
            if !screen.can_submit() {
                anyhow::bail!("a name and a valid email are required");
            }
            let route = screen.submit(state.kv.as_ref(), &mut nav).await?;
            println!("onboarding complete, now on {route:?}");
        }
        Command::Menu { search, categories } => {
            require_onboarded(&nav)?;
            let mut home = load_home(state).await?;
            for category in &categories {
                home.toggle_category(category).await;
            }
            if let Some(text) = search {
                home.set_search_text(text);
                home.next_search().await;
            }
            if home.is_empty() {
                println!("No menu items found");
            }
            for row in home.rows() {
                let image = row.image.as_deref().unwrap_or("-");
                println!(
                    "{:<20} {:>8}  {:<10} {}\n    {}",
                    row.name, row.price, row.category, image, row.description
                );
            }
        }
        Command::Categories => {
            require_onboarded(&nav)?;
            let home = load_home(state).await?;
            for category in home.categories() {
                println!("{category}");
            }
        }
        Command::Reload => {
            let snapshot = refresh_menu(&state)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            println!(
                "{} items in {} categories",
                snapshot.items.len(),
                snapshot.categories.len()
            );
        }
        Command::Profile(cmd) => {
            require_onboarded(&nav)?;
            run_profile(cmd, state).await?;
        }
        Command::Logout => {
            require_onboarded(&nav)?;
            if nav.current() != Route::Profile {
                nav.navigate(Route::Profile)?;
            }
            let mut screen = ProfileScreen::mount(state).await;
            let route = screen.logout(&mut nav).await?;
            println!("logged out, now on {route:?}");
        }
    }
    Ok(())
}

fn require_onboarded(nav: &Navigator) -> anyhow::Result<()> {
    if nav.current() == Route::Onboarding {
        anyhow::bail!(
            "complete onboarding first: little-lemon onboard --name <NAME> --email <EMAIL>"
        );
    }
    Ok(())
}

async fn load_home(state: AppState) -> anyhow::Result<HomeScreen> {
    let mut home = HomeScreen::new(state);
    home.enter().await;
    if let HomeStatus::Error(message) = home.status() {
        anyhow::bail!("{message}");
    }
    Ok(home)
}

async fn run_profile(cmd: ProfileCommand, state: AppState) -> anyhow::Result<()> {
    let mut screen = ProfileScreen::mount(state).await;
    if let Some(message) = screen.message() {
        anyhow::bail!("{message}");
    }

    match cmd {
        ProfileCommand::Show => {
            let header = screen.header();
            println!("{}", serde_json::to_string_pretty(&screen.form)?);
            match header.avatar {
                Some(avatar) => println!("avatar: {avatar}"),
                None => println!("initials: {}", header.initials),
            }
            if !screen.form.phone.is_empty() {
                println!("phone: {}", format_us_phone(&screen.form.phone));
            }
        }
        ProfileCommand::Set(edits) => {
            apply_edits(&mut screen, edits);
            if !screen.is_dirty() {
                println!("nothing to change");
                return Ok(());
            }
            match screen.save().await {
                Ok(()) => println!("{}", screen.message().unwrap_or("Changes saved")),
                Err(ProfileScreenError::Invalid(errors)) => {
                    for e in &errors {
                        eprintln!("{}: {e}", e.field());
                    }
                    anyhow::bail!("profile not saved");
                }
                Err(e) => return Err(e.into()),
            }
        }
        ProfileCommand::RemoveAvatar => {
            screen.remove_avatar().await?;
            println!("avatar removed");
        }
    }
    Ok(())
}

fn apply_edits(screen: &mut ProfileScreen, edits: ProfileEdits) {
    let form = &mut screen.form;
    if let Some(v) = edits.first_name {
        form.first_name = v;
    }
    if let Some(v) = edits.last_name {
        form.last_name = v;
    }
    if let Some(v) = edits.email {
        form.email = v;
    }
    if let Some(v) = edits.phone {
        form.phone = v;
    }
    if let Some(v) = edits.order_statuses {
        form.notifications.order_statuses = v;
    }
    if let Some(v) = edits.password_changes {
        form.notifications.password_changes = v;
    }
    if let Some(v) = edits.special_offers {
        form.notifications.special_offers = v;
    }
    if let Some(v) = edits.newsletter {
        form.notifications.newsletter = v;
    }
    if let Some(v) = edits.avatar {
        screen.set_avatar(Some(v));
    }
}

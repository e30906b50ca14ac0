mod logging;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use posts_client::config::DEFAULT_BASE_URL;
use posts_client::{
    ClientConfig, FormMode, HttpClient, PostFormView, PostId, PostListView, Route, Submission,
    TITLE_MAX_LEN,
};
use std::cell::Cell;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, env = "POSTS_API_URL", default_value = DEFAULT_BASE_URL)]
    server: String,

    #[arg(long, env = "POSTS_API_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    List,

    Show {
        #[arg(short, long)]
        id: PostId,
    },

    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,
    },

    Edit {
        #[arg(short, long)]
        id: PostId,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,
    },

    Delete {
        #[arg(short, long)]
        id: PostId,
    },
}

/// Запоминает последний маршрут, куда нас отправила форма
#[derive(Default)]
struct TerminalNavigator {
    last: Cell<Option<Route>>,
}

impl posts_client::Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "navigate");
        self.last.set(Some(route));
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ClientConfig::new(cli.server);
    if let Some(secs) = cli.timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }

    let client = HttpClient::from_config(config);
    tracing::info!(server = client.base_url(), "using posts API");

    match cli.command {
        Commands::List => {
            let mut view = PostListView::new(client);
            view.load().await.context("Failed to load posts")?;
            print_list(&view);
        }

        Commands::Show { id } => {
            let mut form = PostFormView::new(client, FormMode::Edit(id));
            form.load()
                .await
                .with_context(|| format!("Failed to load post #{}", id))?;

            println!("🔍 Post #{}", id);
            println!("   Title: {}", form.title());
            println!("   Content:");
            for line in form.content().lines() {
                println!("      {}", line);
            }
        }

        Commands::Create { title, content } => {
            let mut form = PostFormView::new(client.clone(), FormMode::Create);
            set_title_checked(&mut form, &title);
            form.set_content(content);

            println!("📝 {}...", form.mode().heading());
            submit(&mut form, client).await?;
        }

        Commands::Edit { id, title, content } => {
            let mut form = PostFormView::new(client.clone(), FormMode::Edit(id));
            if form.load().await.is_err() {
                println!("⚠️ Could not load post #{}, starting from a blank form", id);
            }

            if let Some(title) = title {
                set_title_checked(&mut form, &title);
            }
            if let Some(content) = content {
                form.set_content(content);
            }

            println!("✏️ {} #{}...", form.mode().heading(), id);
            submit(&mut form, client).await?;
        }

        Commands::Delete { id } => {
            let mut view = PostListView::new(client);
            view.load().await.context("Failed to load posts")?;

            view.delete(id)
                .await
                .with_context(|| format!("Failed to delete post #{}", id))?;
            println!("🗑️ Post #{} deleted", id);
            print_list(&view);
        }
    }

    Ok(())
}

async fn submit(form: &mut PostFormView<HttpClient>, client: HttpClient) -> Result<()> {
    let navigator = TerminalNavigator::default();

    match form.submit(&navigator).await.context("Failed to save post")? {
        Submission::Incomplete => bail!("Title and content are required"),
        Submission::Saved(post) => println!("✅ Saved post #{}: {}", post.id, post.title),
    }

    // После сохранения форма возвращает на список - показываем его заново
    if navigator.last.get() == Some(Route::List) {
        let mut view = PostListView::new(client);
        view.load().await.context("Failed to load posts")?;
        print_list(&view);
    }

    Ok(())
}

fn set_title_checked(form: &mut PostFormView<HttpClient>, title: &str) {
    if title.chars().count() > TITLE_MAX_LEN {
        println!("⚠️ Title cut to {} characters", TITLE_MAX_LEN);
    }
    form.set_title(title);
}

fn print_list(view: &PostListView<HttpClient>) {
    let cards = view.cards();
    println!("📋 {} post(s)", cards.len());

    if cards.is_empty() {
        println!("   No posts yet");
        println!("   Tip: Create New Post: posts-cli create --title \"My Post\" --content \"Hello\"");
        return;
    }

    for (i, card) in cards.iter().enumerate() {
        println!();
        println!("   {}. [{}] {}", i + 1, card.id, card.title);
        println!("      {}", truncate(&card.content, 50));
        println!("      edit: {}", card.edit_route);
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    let single_line = s.replace('\n', " ");
    if single_line.chars().count() <= max_chars {
        single_line
    } else {
        let head: String = single_line.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

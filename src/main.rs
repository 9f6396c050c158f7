use clap::Parser;
use notekeep::application::{
    clear_data, delete_note, init::init, storage_status, ConfigService, ListNotesService,
    NoteEdit, SaveNoteService, SummaryService,
};
use notekeep::cli::{
    format_categories, format_note_detail, format_note_list, format_status, format_summary, Cli,
    Commands,
};
use notekeep::error::NotekeepError;
use notekeep::infrastructure::Notebook;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), NotekeepError> {
    let Some(command) = cli.command else {
        println!("notekeep - Short categorized notes in your terminal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path, category } => {
            init(&path, category.as_deref())?;
            println!("Initialized notekeep notebook at {}", path.display());
            Ok(())
        }
        Commands::Add {
            content,
            title,
            category,
        } => {
            let service = SaveNoteService::new(Notebook::discover()?);
            let note = service
                .create(&content, title.as_deref(), category.as_deref())
                .await?;
            println!("Created note {}", note.id);
            Ok(())
        }
        Commands::Edit {
            id,
            content,
            title,
            category,
        } => {
            let service = SaveNoteService::new(Notebook::discover()?);
            let note = service
                .edit(
                    &id,
                    NoteEdit {
                        content,
                        title,
                        category,
                    },
                )
                .await?;
            println!("Updated note {}", note.id);
            Ok(())
        }
        Commands::List { category } => {
            let service = ListNotesService::new(Notebook::discover()?);
            let notes = service.execute(category.as_deref()).await?;
            print!("{}", format_note_list(&notes));
            if notes.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Show { id } => {
            let service = ListNotesService::new(Notebook::discover()?);
            let note = service.show(&id).await?;
            print!("{}", format_note_detail(&note));
            Ok(())
        }
        Commands::Delete { id } => {
            let notebook = Notebook::discover()?;
            if delete_note(&notebook, &id).await? {
                println!("Deleted note {}", id);
            } else {
                println!("No note with id {}", id);
            }
            Ok(())
        }
        Commands::Summary { limit } => {
            let service = SummaryService::new(Notebook::discover()?);
            let summary = service.execute(limit).await?;
            print!("{}", format_summary(&summary));
            Ok(())
        }
        Commands::Categories => {
            print!("{}", format_categories());
            Ok(())
        }
        Commands::Clear { yes } => {
            let notebook = Notebook::discover()?;
            if !yes {
                return Err(NotekeepError::Config(
                    "Refusing to delete all notes without --yes".to_string(),
                ));
            }
            clear_data(&notebook).await?;
            println!("All notes deleted");
            Ok(())
        }
        Commands::Status => {
            let notebook = Notebook::discover()?;
            let status = storage_status(&notebook).await;
            println!("{}", format_status(&status));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Notebook::discover()?);

            if list {
                let config = service.list()?;
                println!("recent_limit = {}", config.recent_limit);
                println!("default_category = {}", config.default_category);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: notekeep config [--list | <key> [<value>]]");
                println!("Valid keys: recent_limit, default_category, created");
                Ok(())
            }
        }
    }
}

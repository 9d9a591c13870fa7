//! services/journal/src/bin/journal.rs

use std::sync::Arc;

use clap::{Parser, Subcommand};
use diario_core::{
    Author, BookDraft, BookSearch, IdGenerator, JournalService, KeyValueStore, Quote, TimestampIds,
};
use journal_lib::{
    adapters::{FileStore, GoogleBooksAdapter},
    config::Config,
    error::JournalError,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "journal", about = "A reading journal kept in device-local storage")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the bookshelf.
    Books {
        #[command(subcommand)]
        action: BooksAction,
    },
    /// Manage author records.
    Authors {
        #[command(subcommand)]
        action: AuthorsAction,
    },
    /// Manage quotes extracted from books.
    Quotes {
        #[command(subcommand)]
        action: QuotesAction,
    },
    /// Manage the wishlist.
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Search the remote catalog.
    Search { query: String },
}

#[derive(Subcommand)]
enum BooksAction {
    /// Add a book, registering its author on the fly when needed.
    Add {
        titulo: String,
        autor: String,
        #[arg(long, default_value = "")]
        ano: String,
        #[arg(long, default_value_t = 0)]
        nota: u8,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        capa: Option<String>,
    },
    /// List the whole shelf.
    List,
    /// Remove a book by id.
    Remove { id: String },
}

#[derive(Subcommand)]
enum AuthorsAction {
    Add {
        nome: String,
        nacionalidade: String,
        #[arg(long, default_value = "")]
        nascimento: String,
        #[arg(long, default_value = "")]
        genero: String,
        #[arg(long, default_value = "")]
        biografia: String,
    },
    List,
    Remove { id: String },
}

#[derive(Subcommand)]
enum QuotesAction {
    Add {
        book_id: String,
        texto: String,
        #[arg(long, default_value = "")]
        pagina: String,
        #[arg(long, default_value = "")]
        capitulo: String,
        #[arg(long, default_value = "")]
        personagem: String,
        #[arg(long, default_value = "")]
        sentimento: String,
    },
    /// List quotes, optionally only those of one book.
    List {
        #[arg(long)]
        book: Option<String>,
    },
    Remove { id: String },
}

#[derive(Subcommand)]
enum WishlistAction {
    Add { title: String, author: String },
    List,
    Remove { id: String },
    /// Consume an item: remove it and print the prefill for a new book.
    Read { id: String },
}

#[tokio::main]
async fn main() -> Result<(), JournalError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // --- 2. Wire the Store and Service Adapters ---
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.data_dir)?);
    let ids: Arc<dyn IdGenerator> = Arc::new(TimestampIds);
    let service = JournalService::new(store, ids.clone());

    // --- 3. Dispatch the Requested Command ---
    match cli.command {
        Command::Books { action } => match action {
            BooksAction::Add {
                titulo,
                autor,
                ano,
                nota,
                description,
                capa,
            } => {
                let saved = service
                    .save_book(BookDraft {
                        titulo,
                        autor,
                        ano_publicacao: ano,
                        nota,
                        description,
                        cover_image_uri: capa,
                    })
                    .await?;
                println!("Livro salvo: {} ({})", saved.book.titulo, saved.book.id);
                if let Some(author) = saved.created_author {
                    println!("Novo autor \"{}\" foi salvo!", author.nome);
                }
            }
            BooksAction::List => {
                for book in service.books.list().await? {
                    println!(
                        "{}  {} — {} ({}) {}/5",
                        book.id, book.titulo, book.autor, book.ano_publicacao, book.nota
                    );
                }
            }
            BooksAction::Remove { id } => service.books.remove(&id).await?,
        },
        Command::Authors { action } => match action {
            AuthorsAction::Add {
                nome,
                nacionalidade,
                nascimento,
                genero,
                biografia,
            } => {
                let author = Author {
                    id: ids.next_id(),
                    nome,
                    nacionalidade,
                    data_nascimento: nascimento,
                    genero_principal: genero,
                    biografia,
                };
                service.authors.add(author.clone()).await?;
                println!("Autor salvo: {} ({})", author.nome, author.id);
            }
            AuthorsAction::List => {
                for author in service.authors.list().await? {
                    println!("{}  {} — {}", author.id, author.nome, author.nacionalidade);
                }
            }
            AuthorsAction::Remove { id } => service.authors.remove(&id).await?,
        },
        Command::Quotes { action } => match action {
            QuotesAction::Add {
                book_id,
                texto,
                pagina,
                capitulo,
                personagem,
                sentimento,
            } => {
                let quote = Quote {
                    id: ids.next_id(),
                    book_id,
                    texto,
                    pagina,
                    capitulo,
                    personagem,
                    sentimento,
                };
                service.quotes.add(quote.clone()).await?;
                println!("Citação salva ({})", quote.id);
            }
            QuotesAction::List { book } => {
                let quotes = match book {
                    Some(book_id) => service.quotes.list_by_book(&book_id).await?,
                    None => service.quotes.list().await?,
                };
                for quote in quotes {
                    println!("{}  [{}] \"{}\"", quote.id, quote.book_id, quote.texto);
                }
            }
            QuotesAction::Remove { id } => service.quotes.remove(&id).await?,
        },
        Command::Wishlist { action } => match action {
            WishlistAction::Add { title, author } => {
                service.add_to_wishlist(&title, &author).await?;
            }
            WishlistAction::List => {
                for item in service.wishlist.list().await? {
                    println!("{}  {} — {}", item.id, item.title, item.author);
                }
            }
            WishlistAction::Remove { id } => service.wishlist.remove(&id).await?,
            WishlistAction::Read { id } => match service.mark_wishlist_read(&id).await? {
                Some(prefill) => println!(
                    "Já li! Prefill do novo livro: {} — {}",
                    prefill.title, prefill.author
                ),
                None => println!("Nenhum item com esse id na lista de desejos."),
            },
        },
        Command::Search { query } => {
            let catalog = GoogleBooksAdapter::new(config.books_api_url.clone());
            for result in catalog.search_books(&query).await {
                println!(
                    "{} — {} ({})",
                    result.title,
                    result.authors.join(", "),
                    result.published_date
                );
            }
        }
    }

    Ok(())
}

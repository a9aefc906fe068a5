use routes_planner::{
    default_entrypoint, resolve_entrypoint, AdminPage, EntrypointConfig, Error, ExecutionContext,
    TripList, TripSelectionView,
};
use std::env;
use url::Url;

const USAGE: &str = "usage:
    routes_planner trips [FROM] [TO] [--select ID] [--json]
    routes_planner entrypoint [PAGE_URL]
    routes_planner admin [PAGE_URL]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("routes_planner=info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("trips") => trips(&args[1..])?,
        Some("entrypoint") => match args.get(1) {
            Some(location) => {
                let context = ExecutionContext::browser(location)?;
                println!("{}", resolve_entrypoint(&context, &EntrypointConfig::from_env()));
            }
            None => println!("{}", default_entrypoint()),
        },
        Some("admin") => admin(args.get(1)).await?,
        _ => println!("{}", USAGE),
    }

    Ok(())
}

fn context(page_url: Option<&String>) -> Result<ExecutionContext, Error> {
    match page_url {
        Some(location) => ExecutionContext::browser(location),
        None => Ok(ExecutionContext::Server),
    }
}

fn trips(args: &[String]) -> Result<(), Error> {
    let mut view = TripSelectionView::new();
    let mut codes = Vec::new();
    let mut selected = None;
    let mut json = false;

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--select" => selected = it.next(),
            code => codes.push(code),
        }
    }

    if let Some(from) = codes.first() {
        view.select_origin(from)?;
    }
    if let Some(to) = codes.get(1) {
        view.select_destination(to)?;
    }
    if let Some(id) = selected {
        view.select_trip(id)?;
    }

    let trips: TripList = view.filtered_trips().cloned().collect();

    if json {
        println!("{}", trips.to_json()?);
        return Ok(());
    }

    println!("{} → {}", view.origin(), view.destination());
    println!("\t{}", view.origin_stations());
    println!("\t{}", view.destination_stations());
    println!();
    print!("{}", trips);
    println!();
    println!("{}", view.booking_summary());
    view.confirm_booking();

    Ok(())
}

async fn admin(page_url: Option<&String>) -> Result<(), Error> {
    let context = context(page_url)?;
    let mut page = AdminPage::new();

    println!("{}", page.title());
    let view = page
        .mount(&context, &EntrypointConfig::from_env(), |entrypoint| async move {
            // A relative entrypoint is served by the page host.
            let base = Url::parse("http://localhost/")
                .map_err(|e| Error::AdminLoadError(e.to_string()))?;
            let url = base
                .join(&entrypoint)
                .map_err(|e| Error::AdminLoadError(e.to_string()))?;

            Ok::<_, Error>(format!("HydraAdmin bound to {}", url))
        })
        .await;
    println!("{}", view);

    Ok(())
}

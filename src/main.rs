use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use rewards_admin::{
    AdminClient, ApiError, Config, ErrorInfo, HttpTransport, ListState, ListView,
    campaigns::CampaignFilters,
    coerce::or_na,
    credentials::StaticToken,
    derive_view,
    list_view::{DateRange, Listable, ListFilter, StatusFilter},
    models::{Campaign, CreditDebit, Reward, RewardHistory, Settlement, Transaction, User},
    reward_history::{RewardHistoryFilters, ledger_totals},
    rewards::RewardFilters,
    settlements::{SettlementFilters, settlement_totals},
};

type Client = AdminClient<HttpTransport, Option<StaticToken>>;

const USAGE: &str = "\
usage: rewards-admin <command> [options]

lists:    campaigns | rewards | history | settlements
          --search TEXT  --status STATUS  --type TYPE
          --direction credit|debit  --range today|week|month  --page N
details:  user ID | transaction ID | settlement ID | history-entry ID
actions:  delete-campaign ID | activate-campaign ID | deactivate-campaign ID
          delete-reward ID | deactivate-reward ID   [--yes]";

#[derive(Debug, Default)]
struct Args {
    command: String,
    id: Option<String>,
    search: Option<String>,
    status: Option<String>,
    kind: Option<String>,
    direction: Option<String>,
    range: Option<String>,
    page: usize,
    assume_yes: bool,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut args = Args {
        page: 1,
        ..Default::default()
    };
    args.command = raw.next().context(USAGE)?;

    while let Some(arg) = raw.next() {
        let mut value = |name: &str| raw.next().with_context(|| format!("{} needs a value", name));
        match arg.as_str() {
            "--search" => args.search = Some(value("--search")?),
            "--status" => args.status = Some(value("--status")?),
            "--type" => args.kind = Some(value("--type")?),
            "--direction" => args.direction = Some(value("--direction")?),
            "--range" => args.range = Some(value("--range")?),
            "--page" => {
                args.page = value("--page")?
                    .parse()
                    .context("--page must be a positive number")?
            }
            "--yes" | "-y" => args.assume_yes = true,
            other if other.starts_with("--") => bail!("unknown option {}\n\n{}", other, USAGE),
            other => args.id = Some(other.to_string()),
        }
    }
    Ok(args)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    let args = parse_args(std::env::args().skip(1))?;

    let credentials = config.api_token.clone().map(StaticToken);
    let client: Client = AdminClient::from_config(HttpTransport::new(), credentials, &config);

    let Err(err) = run(&client, &args).await else {
        return Ok(());
    };
    let Some(api_error) = err.downcast_ref::<ApiError>() else {
        return Err(err);
    };

    let info = ErrorInfo::from_error(api_error);
    eprintln!("{}: {}", info.title, info.message);
    for (key, value) in &info.debug {
        eprintln!("  {} = {}", key, value);
    }
    std::process::exit(1);
}

fn require_id(args: &Args) -> anyhow::Result<&str> {
    args.id
        .as_deref()
        .with_context(|| format!("{} needs an id\n\n{}", args.command, USAGE))
}

async fn run(client: &Client, args: &Args) -> anyhow::Result<()> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());

    match args.command.as_str() {
        "campaigns" => {
            let campaigns = client.list_campaigns().await?;
            let mut state = ListState::new(CampaignFilters::default());
            state.update_filters(|f| {
                f.status = args.status.as_deref().map(StatusFilter::from_param).unwrap_or_default();
                f.campaign_type = args.kind.clone();
            });
            print_list(&campaigns, state, args, now, print_campaign);
        }
        "rewards" => {
            let rewards = client.list_rewards().await?;
            let mut state = ListState::new(RewardFilters::default());
            state.update_filters(|f| {
                f.status = args.status.as_deref().map(StatusFilter::from_param).unwrap_or_default();
                f.reward_type = args.kind.clone();
            });
            print_list(&rewards, state, args, now, print_reward);
        }
        "history" => {
            let history = client.list_reward_history().await?;
            let mut state = ListState::new(RewardHistoryFilters::default());
            state.update_filters(|f| {
                f.reward_type = args.kind.clone();
                f.credit_debit = args.direction.as_deref().map(CreditDebit::parse);
                f.date_range = args.range.as_deref().map(DateRange::from_param).unwrap_or_default();
            });
            let totals = ledger_totals(&history);
            println!(
                "credited {:.2}  debited {:.2}  net {:.2}",
                totals.credited,
                totals.debited,
                totals.net()
            );
            print_list(&history, state, args, now, print_history);
        }
        "settlements" => {
            let settlements = client.list_settlements().await?;
            let mut state = ListState::new(SettlementFilters::default());
            state.update_filters(|f| f.status = args.status.clone());
            let totals = settlement_totals(&settlements);
            println!(
                "commission {:.2}  settled {:.2}  pending {:.2}  net {:.2}",
                totals.commission, totals.settled, totals.pending, totals.net
            );
            print_list(&settlements, state, args, now, print_settlement);
        }
        "user" => print_user(&client.get_user_details(require_id(args)?).await?),
        "transaction" => print_transaction(&client.get_transaction(require_id(args)?).await?),
        "settlement" => print_settlement_detail(&client.get_settlement(require_id(args)?).await?),
        "history-entry" => print_history_detail(&client.get_reward_history(require_id(args)?).await?),
        "delete-campaign" => {
            let id = require_id(args)?;
            if confirm(args, &format!("Delete campaign {}?", id)) {
                client.delete_campaign(id).await?;
                println!("Campaign deleted successfully");
            }
        }
        "activate-campaign" | "deactivate-campaign" => {
            let id = require_id(args)?;
            let active = args.command == "activate-campaign";
            let verb = if active { "Activate" } else { "Deactivate" };
            if confirm(args, &format!("{} campaign {}?", verb, id)) {
                client.set_campaign_active(id, active).await?;
                println!("Campaign {}d successfully", verb.to_lowercase());
            }
        }
        "delete-reward" => {
            let id = require_id(args)?;
            if confirm(args, &format!("Delete reward {}?", id)) {
                client.delete_reward(id).await?;
                println!("Reward deleted successfully");
            }
        }
        "deactivate-reward" => {
            let id = require_id(args)?;
            if confirm(args, &format!("Deactivate reward {}?", id)) {
                client.deactivate_reward(id).await?;
                println!("Reward deactivated successfully");
            }
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }
    Ok(())
}

fn confirm(args: &Args, prompt: &str) -> bool {
    if args.assume_yes {
        return true;
    }
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn print_list<T, F>(items: &[T], mut state: ListState<F>, args: &Args, now: OffsetDateTime, row: fn(&T))
where
    T: Listable,
    F: ListFilter<T>,
{
    if let Some(term) = &args.search {
        state.set_search(term.clone());
    }
    state.set_page(args.page);

    let view: ListView<T> = derive_view(items, &state, now);
    if view.is_empty() {
        println!("No records found ({} loaded)", view.total_items);
        return;
    }
    for item in &view.rows {
        row(item);
    }
    let pages: Vec<String> = view
        .pages
        .iter()
        .map(|p| if *p == view.current_page { format!("[{}]", p) } else { p.to_string() })
        .collect();
    println!(
        "\nshowing {}-{} of {} (page {} of {})  {}",
        view.first_index,
        view.last_index,
        view.filtered_count,
        view.current_page,
        view.total_pages,
        pages.join(" ")
    );
}

fn active_label(is_active: bool) -> &'static str {
    if is_active { "active" } else { "inactive" }
}

fn print_campaign(c: &Campaign) {
    println!(
        "{:>6}  {:<32}  {:<12}  {:<8}  rewards {:>4}  spins {:>6}  max/interval {:>3}  {} -> {}",
        c.id,
        c.title,
        c.campaign_type,
        active_label(c.is_active),
        c.reward_count,
        c.total_spins,
        c.max_attempts_per_interval,
        or_na(c.start_date.as_deref()),
        or_na(c.end_date.as_deref()),
    );
}

fn print_reward(r: &Reward) {
    println!(
        "{:>6}  {:<28}  {:<12}  {:<8}  normal {:>8.2}  vip {:>8.2}  awarded {:>5}  credits {:>10.2}",
        r.id,
        r.reward_name,
        r.reward_type,
        active_label(r.is_active),
        r.normal_reward_value,
        r.vip_reward_value,
        r.total_awarded,
        r.total_credits,
    );
}

fn print_history(h: &RewardHistory) {
    println!(
        "{:>6}  {:<20}  {:<24}  {:<6}  {:>10.2}  {}",
        h.id,
        h.user_name,
        h.reward_name,
        h.credit_debit.as_str(),
        h.signed_amount(),
        or_na(h.created_at.as_deref()),
    );
}

fn print_settlement(s: &Settlement) {
    println!(
        "{:>8}  {:<24}  {:<10}  settlement {:>10.2}  settled {:>10.2}  pending {:>10.2}  net {:>10.2}",
        s.settlement_id,
        s.store_name,
        s.settlement_status,
        s.settlement_amount,
        s.settled_amount,
        s.pending_amount,
        s.effective_net_amount(),
    );
}

fn field(label: &str, value: impl std::fmt::Display) {
    println!("{:<22} {}", label, value);
}

fn print_user(u: &User) {
    println!("[{}] {}", u.initials(), u.name);
    field("id", &u.id);
    field("email", or_na(u.email.as_deref()));
    field("phone", or_na(u.phone.as_deref()));
    field("address", or_na(u.address.as_deref()));
    field("location", u.location().as_deref().unwrap_or("N/A"));
    field("status", active_label(u.is_active));
    field("vip", if u.is_vip { "yes" } else { "no" });
    field(
        "vip period",
        format!(
            "{} -> {}",
            or_na(u.vip_start_date.as_deref()),
            or_na(u.vip_end_date.as_deref())
        ),
    );
    field("email verified", u.is_email_verified);
    field("phone verified", u.is_phone_verified);
    field("cashback balance", format!("{:.2}", u.cashback_balance));
    field("pending cashback", format!("{:.2}", u.pending_cashback));
    field("total cashback", format!("{:.2}", u.total_cashback_earned));

    println!("\ntransactions ({})", u.transactions.len());
    for t in &u.transactions {
        println!(
            "  {:<16} {:>10.2}  {:<10} {}",
            t.transaction_number,
            t.final_amount,
            t.payment_status,
            or_na(t.created_at.as_deref())
        );
    }
    println!("\nrewards ({})", u.rewards.len());
    for h in &u.rewards {
        print!("  ");
        print_history(h);
    }
    println!("\nreferrals ({})", u.referrals.len());
    for r in &u.referrals {
        println!("  {:<24} {:<28} {}", r.name, or_na(r.email.as_deref()), active_label(r.is_active));
    }
}

fn print_transaction(t: &Transaction) {
    field("transaction", &t.transaction_number);
    field("id", &t.id);
    field("bill amount", format!("{:.2}", t.bill_amount));
    field("vendor discount", format!("{:.2}", t.vendor_discount));
    field("coupon discount", format!("{:.2}", t.coupon_discount));
    field("cashback used", format!("{:.2}", t.cashback_used));
    field("final amount", format!("{:.2}", t.final_amount));
    field("payment status", &t.payment_status);
    field("payment method", or_na(t.payment_method.as_deref()));
    field("store", or_na(t.store_name.as_deref()));
    field("user", or_na(t.user_name.as_deref()));
    field("coupon", or_na(t.coupon_code.as_deref()));
    field("created", or_na(t.created_at.as_deref()));
}

fn print_settlement_detail(s: &Settlement) {
    field("settlement", &s.settlement_id);
    field("store", &s.store_name);
    field("user", &s.user_name);
    field("status", &s.settlement_status);
    field("transactions", s.total_transactions);
    field("settlement amount", format!("{:.2}", s.settlement_amount));
    field("commission", format!("{:.2}", s.commission_amount));
    field("tax", format!("{:.2}", s.tax_amount));
    field("platform fee", format!("{:.2}", s.platform_fee));
    field("net amount", format!("{:.2}", s.effective_net_amount()));
    field("settled", format!("{:.2}", s.settled_amount));
    field("pending", format!("{:.2}", s.pending_amount));
    field("payment method", or_na(s.payment_method.as_deref()));
    field("payment reference", or_na(s.payment_reference.as_deref()));
    field("payment date", or_na(s.payment_date.as_deref()));
    field("created", or_na(s.created_at.as_deref()));
    field("updated", or_na(s.updated_at.as_deref()));
}

fn print_history_detail(h: &RewardHistory) {
    field("entry", &h.id);
    field("user", &h.user_name);
    field("email", or_na(h.user_email.as_deref()));
    field("phone", or_na(h.user_phone.as_deref()));
    field("reward", &h.reward_name);
    field("type", &h.reward_type);
    field("direction", h.credit_debit.as_str());
    field("amount", format!("{:.2}", h.signed_amount()));
    field("transaction", or_na(h.transaction_number.as_deref()));
    field("store", or_na(h.store_name.as_deref()));
    field("description", or_na(h.description.as_deref()));
    field("created", or_na(h.created_at.as_deref()));
}

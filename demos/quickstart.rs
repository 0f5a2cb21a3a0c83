use sharptime::{DateTime, DateTimeFormat, DateTimeKind, TimeSpan};

fn main() {
    let now = DateTime::now();
    let utc = now.to_utc();

    println!("local: {}", now.format(DateTimeFormat::Full));
    println!("utc:   {}", utc.format(DateTimeFormat::Full));
    println!("epoch: {}", now.epoch());
    println!("ldap ticks: {}", now.ldap_ticks());
    println!("js ticks:   {}", now.to_javascript_ticks());

    let gagarin = DateTime::new(1961, 4, 12, DateTimeKind::Utc);
    let since = now.to_utc().subtract(&gagarin);
    println!("since Vostok 1: {} ({:.1} days)", since, since.total_days());

    let deadline = now.add_months_component(1);
    println!("one calendar month out: {}", deadline.format(DateTimeFormat::LongDate));
}

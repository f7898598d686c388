use std::sync::Arc;

use chrono::NaiveDate;
use travelhome_core::ValidationError;
use travelhome_infra::{InMemoryItemRepository, ItemRepository, StoreError};
use travelhome_listings::{
    Bathroom, Category, Item, Order, Scarcity, mark_booked, parse_available_dates,
};

fn repo() -> Arc<InMemoryItemRepository> {
    travelhome_observability::init();
    Arc::new(InMemoryItemRepository::new())
}

#[test]
fn admin_extincts_a_categorized_item() -> anyhow::Result<()> {
    let repo = repo();

    let mut item = repo.save(Item::new("hi", "mom", 1000))?;
    let lunch = repo.save_category(Category::new("Lunch"))?;
    repo.save_category(Category::new("Dinner"))?;
    item.add_category(lunch.clone());
    let item = repo.save(item)?;
    let item_id = item.id_typed().expect("saved items have ids");

    let shown = repo.get(item_id)?;
    assert_eq!(shown.scarcity().label(), "Endangered");
    assert_eq!(repo.load_categories(item_id)?, vec![lunch]);

    let mut shown = shown;
    assert!(shown.trigger_extinction());
    repo.save(shown)?;

    let reloaded = repo.get(item_id)?;
    assert_eq!(reloaded.scarcity(), Scarcity::Extinct);
    assert_eq!(reloaded.scarcity().label(), "Extinct");
    Ok(())
}

#[test]
fn listing_is_ordered_and_booked() -> anyhow::Result<()> {
    let repo = repo();

    let item = repo.save(
        Item::new("MyTitle", "MyDesc", 3200).with_bathroom(Bathroom::Private),
    )?;
    let item_id = item.id_typed().expect("saved items have ids");

    let first = repo.save_order(Order::new(None))?;
    let second = repo.save_order(Order::new(None))?;
    repo.attach_to_order(first.id_typed(), item_id)?;
    repo.attach_to_order(second.id_typed(), item_id)?;
    assert_eq!(repo.orders_for_item(item_id)?.len(), 2);

    let mut calendar = parse_available_dates("26/8/2014", "28/8/2014")?;
    let booked = [NaiveDate::from_ymd_opt(2014, 8, 26).expect("valid date")];
    mark_booked(&mut calendar, &booked);

    let open: Vec<NaiveDate> = calendar
        .iter()
        .filter(|entry| entry.available)
        .map(|entry| entry.date)
        .collect();
    assert_eq!(open.len(), 2);
    assert_eq!(open[0], NaiveDate::from_ymd_opt(2014, 8, 27).expect("valid date"));
    Ok(())
}

#[test]
fn second_listing_with_same_title_is_refused() -> anyhow::Result<()> {
    let repo = repo();
    repo.save(Item::new("Food", "Yum", 2000))?;

    let err = repo.save(Item::new("Food", "Also yum", 1500)).unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(ValidationError::DuplicateTitle("Food".to_string()))
    );
    Ok(())
}

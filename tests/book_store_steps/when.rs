//! When steps for book store BDD scenarios.

use super::world::BookWorld;
use bookstore::book::domain::BookCandidate;
use rstest_bdd_macros::when;

#[when("the books are listed")]
fn list_books(world: &mut BookWorld) -> Result<(), eyre::Report> {
    world.last_response = Some(world.api()?.get_books());
    Ok(())
}

#[when(r#"book "{id}" titled "{title}" by "{author}" from {year:i32} in "{genre}" is added"#)]
#[expect(
    clippy::too_many_arguments,
    reason = "Step definition captures every book field from a single step"
)]
fn add_book(
    world: &mut BookWorld,
    id: String,
    title: String,
    author: String,
    year: i32,
    genre: String,
) -> Result<(), eyre::Report> {
    let response = world
        .api()?
        .add_book(BookCandidate::new(id, title, author, year, genre));
    world.last_response = Some(response);
    Ok(())
}

#[when(r#"an incomplete book "{id}" titled "{title}" is added"#)]
fn add_incomplete_book(
    world: &mut BookWorld,
    id: String,
    title: String,
) -> Result<(), eyre::Report> {
    let candidate = BookCandidate::default().with_id(id).with_title(title);
    world.last_response = Some(world.api()?.add_book(candidate));
    Ok(())
}

#[when(r#"book "{id}" is deleted"#)]
fn delete_book(world: &mut BookWorld, id: String) -> Result<(), eyre::Report> {
    world.last_response = Some(world.api()?.delete_book(&id));
    Ok(())
}

#[when(
    r#"book "{target}" is replaced by "{id}" titled "{title}" by "{author}" from {year:i32} in "{genre}""#
)]
#[expect(
    clippy::too_many_arguments,
    reason = "Step definition captures the target and every book field from a single step"
)]
fn replace_book(
    world: &mut BookWorld,
    target: String,
    id: String,
    title: String,
    author: String,
    year: i32,
    genre: String,
) -> Result<(), eyre::Report> {
    let response = world
        .api()?
        .update_book(&target, BookCandidate::new(id, title, author, year, genre));
    world.last_response = Some(response);
    Ok(())
}

#[when(r#"book "{target}" is replaced by a record titled "{title}" only"#)]
fn replace_with_incomplete_record(
    world: &mut BookWorld,
    target: String,
    title: String,
) -> Result<(), eyre::Report> {
    let candidate = BookCandidate::default().with_title(title);
    world.last_response = Some(world.api()?.update_book(&target, candidate));
    Ok(())
}

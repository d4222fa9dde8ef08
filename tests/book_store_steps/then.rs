//! Then steps for book store BDD scenarios.

use super::world::BookWorld;
use rstest_bdd_macros::then;

#[then("the response status is {status:u16}")]
fn response_status(world: &BookWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world.last_response()?.status.code();
    if actual != status {
        return Err(eyre::eyre!("expected status {status}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the response message is "{message}""#)]
fn response_message(world: &BookWorld, message: String) -> Result<(), eyre::Report> {
    let response = world.last_response()?;
    if response.message.as_deref() != Some(message.as_str()) {
        return Err(eyre::eyre!("expected message {message:?}, got {response:?}"));
    }
    Ok(())
}

#[then(r#"the response error is "{error}""#)]
fn response_error(world: &BookWorld, error: String) -> Result<(), eyre::Report> {
    let response = world.last_response()?;
    if response.error.as_deref() != Some(error.as_str()) {
        return Err(eyre::eyre!("expected error {error:?}, got {response:?}"));
    }
    Ok(())
}

#[then(r#"the listing contains book "{id}" titled "{title}""#)]
fn listing_contains(world: &BookWorld, id: String, title: String) -> Result<(), eyre::Report> {
    let books = world.api()?.get_books().data.unwrap_or_default();
    let matching: Vec<_> = books.iter().filter(|book| book.id() == id.as_str()).collect();
    let [book] = matching.as_slice() else {
        return Err(eyre::eyre!(
            "expected exactly one book with id {id}, found {}",
            matching.len()
        ));
    };
    if book.title() != title {
        return Err(eyre::eyre!(
            "expected book {id} titled {title:?}, found {:?}",
            book.title()
        ));
    }
    Ok(())
}

#[then(r#"the listing does not contain book "{id}""#)]
fn listing_lacks(world: &BookWorld, id: String) -> Result<(), eyre::Report> {
    let books = world.api()?.get_books().data.unwrap_or_default();
    if books.iter().any(|book| book.id() == id.as_str()) {
        return Err(eyre::eyre!("expected book {id} to be absent"));
    }
    Ok(())
}

#[then("the store holds {count:usize} books")]
fn store_size(world: &BookWorld, count: usize) -> Result<(), eyre::Report> {
    let books = world.api()?.get_books().data.unwrap_or_default();
    if books.len() != count {
        return Err(eyre::eyre!("expected {count} books, found {}", books.len()));
    }
    Ok(())
}

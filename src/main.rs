mod entry;
mod system;

use fakehdrs::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}

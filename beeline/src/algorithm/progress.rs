use kdam::{Bar, BarExt};
use std::sync::{Arc, Mutex};

/// a progress bar that rayon workers can share.
pub fn shared_bar(total: usize, desc: &str) -> Result<Arc<Mutex<Bar>>, String> {
    let bar = Bar::builder()
        .total(total)
        .desc(String::from(desc))
        .build()?;
    Ok(Arc::new(Mutex::new(bar)))
}

pub fn tick(bar: &Arc<Mutex<Bar>>) {
    if let Ok(mut b) = bar.lock() {
        let _ = b.update(1);
    }
}

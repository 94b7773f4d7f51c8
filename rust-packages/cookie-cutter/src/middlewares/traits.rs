use crate::structures::HttpRequest;

pub trait Middleware: Send + Sync {
    // return true to continue, false to stop chain immediately
    fn handle(&self, req: &mut HttpRequest) -> bool;
}

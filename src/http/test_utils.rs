use crate::http::status::{Entry, Registry, Status};
use crate::http::Result;

// 200 and 201 are both declared twice.
pub(crate) static DUPLICATE_TABLE: [Entry; 4] = [
    Entry::new(Status::OK, 200, "Ok", "OK"),
    Entry::new(Status::CREATED, 201, "Created", "CREATED"),
    Entry::new(Status::ACCEPTED, 200, "Accepted late", "ACCEPTED"),
    Entry::new(Status::NO_CONTENT, 201, "No Content", "NO_CONTENT"),
];

pub(crate) static MISSING_REASON_TABLE: [Entry; 2] = [
    Entry::new(Status::OK, 200, "Ok", "OK"),
    Entry::new(Status::CREATED, 201, "", "CREATED"),
];

pub(crate) fn duplicate_registry() -> Registry {
    Registry::new(&DUPLICATE_TABLE)
}

pub(crate) fn resolve_from_threads(code: i32, threads: usize, rounds: usize) -> Vec<Result<Status>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                scope.spawn(move || {
                    (0..rounds)
                        .map(|_| Status::resolve(code))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect()
    })
}

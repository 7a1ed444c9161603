use stash_di::{
    boxed, utils::thread_safety::RcThreadSafety, Config, Container, FactoryResult, Inject, ResolveErrorKind, Scope, Selector,
    DEFAULT_REGISTRY, PRIVATE_REGISTRY,
};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Barrier,
    },
    thread,
};
use tracing_test::traced_test;

trait Animal: Send + Sync {
    fn name(&self) -> String;
}

struct Rabbit(String);
struct Sloth(String);

impl Animal for Rabbit {
    fn name(&self) -> String {
        format!("rabbit {}", self.0)
    }
}

impl Animal for Sloth {
    fn name(&self) -> String {
        format!("sloth {}", self.0)
    }
}

type BoxedAnimal = Box<dyn Animal>;

fn zoo() -> Container {
    let container = Container::new();
    container.register_with(|| Ok(boxed!(Rabbit("Steve".into()); Animal)), Config::default().with_qualifier("stub"));
    container.register(|| Ok(boxed!(Sloth("John".into()); Animal)));
    container
}

#[test]
#[traced_test]
fn test_qualified_registrations_coexist() {
    let container = zoo();

    let stub = container.resolve_with::<BoxedAnimal>(&Selector::new().with_qualifier("stub")).unwrap();
    let unqualified = container.resolve::<BoxedAnimal>().unwrap();

    assert_eq!(stub.name(), "rabbit Steve");
    assert_eq!(unqualified.name(), "sloth John");
    assert_eq!(container.registry_len(DEFAULT_REGISTRY), Some(2));
}

#[test]
#[traced_test]
fn test_registries_are_independent() {
    let container = Container::new();
    container.register_with(|| Ok(boxed!(Rabbit("Steve".into()); Animal)), Config::default().with_registry("A"));

    assert!(container.resolve_with::<BoxedAnimal>(&Selector::new().with_registry("A")).is_ok());
    assert!(matches!(
        container.resolve_with::<BoxedAnimal>(&Selector::new().with_registry("B")),
        Err(ResolveErrorKind::UnknownRegistry { name }) if name == "B",
    ));
    assert!(matches!(
        container.resolve::<BoxedAnimal>(),
        Err(ResolveErrorKind::UnregisteredDependency { registry, .. }) if registry == DEFAULT_REGISTRY,
    ));
    assert_eq!(container.registry_names(), vec!["A".to_owned(), DEFAULT_REGISTRY.to_owned()]);
}

#[test]
#[traced_test]
fn test_proxy_repoints_without_touching_returned_values() {
    let container = zoo();
    let mut animal = Inject::<BoxedAnimal>::new(&container).with_qualifier("stub");

    let before = animal.get().unwrap();
    animal.set_qualifier(None);
    let after = animal.get().unwrap();

    assert_eq!(before.name(), "rabbit Steve");
    assert_eq!(after.name(), "sloth John");
    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
#[traced_test]
fn test_retain_follows_external_owners() {
    struct Session(usize);

    let created = Arc::new(AtomicUsize::new(0));
    let container = Container::new();
    container.register_with(
        {
            let created = created.clone();
            move || Ok(Session(created.fetch_add(1, Ordering::SeqCst)))
        },
        Config::from(Scope::Retain).with_registry(PRIVATE_REGISTRY),
    );
    let selector = Selector::new().with_registry(PRIVATE_REGISTRY);

    let held = container.resolve_with::<Session>(&selector).unwrap();
    let again = container.resolve_with::<Session>(&selector).unwrap();
    assert!(Arc::ptr_eq(&held, &again));
    assert_eq!(created.load(Ordering::SeqCst), 1);

    drop(held);
    drop(again);

    let recreated = container.resolve_with::<Session>(&selector).unwrap();
    assert_eq!(recreated.0, 1);
    assert_eq!(created.load(Ordering::SeqCst), 2);
}

#[test]
#[traced_test]
fn test_dependent_factories() {
    struct Settings(&'static str);
    struct Client(RcThreadSafety<Settings>);

    let container = Container::new();
    container.register(|| Ok(Settings("localhost")));
    container.register_with(
        {
            let container = container.clone();
            move || -> FactoryResult<Client> {
                let settings = container.resolve::<Settings>().map_err(anyhow::Error::from)?;
                Ok(Client(settings))
            }
        },
        Config::default().with_scope(Scope::Property),
    );

    let first = container.resolve::<Client>().unwrap();
    let second = container.resolve::<Client>().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first.0, &second.0));
    assert_eq!(first.0 .0, "localhost");
}

#[test]
#[traced_test]
fn test_concurrent_global_resolve_creates_once() {
    const THREADS: usize = 8;

    struct Pool;

    let created = Arc::new(AtomicUsize::new(0));
    let container = Container::new();
    container.register({
        let created = created.clone();
        move || {
            created.fetch_add(1, Ordering::SeqCst);
            thread::yield_now();
            Ok(Pool)
        }
    });

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles = (0..THREADS)
        .map(|_| {
            let container = container.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                container.resolve::<Pool>().unwrap()
            })
        })
        .collect::<Vec<_>>();
    let pools = handles.into_iter().map(|handle| handle.join().unwrap()).collect::<Vec<_>>();

    assert_eq!(created.load(Ordering::SeqCst), 1);
    assert!(pools.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}

#[test]
#[traced_test]
fn test_concurrent_register_and_resolve() {
    #[derive(Debug)]
    struct Version(usize);

    let container = Container::new();
    container.register(|| Ok(Version(0)));

    let writer = {
        let container = container.clone();
        thread::spawn(move || {
            for version in 1..=50 {
                container.register(move || Ok(Version(version)));
            }
        })
    };
    let reader = {
        let container = container.clone();
        thread::spawn(move || {
            for _ in 0..50 {
                assert!(container.resolve::<Version>().unwrap().0 <= 50);
            }
        })
    };
    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(container.resolve::<Version>().unwrap().0, 50);
}

#[test]
#[traced_test]
fn test_shared_container() {
    struct SharedOnly(u8);

    Container::shared().register(|| Ok(SharedOnly(42)));

    let inject = Inject::<SharedOnly>::shared();
    assert_eq!(inject.get().unwrap().0, 42);
    assert!(Arc::ptr_eq(&inject.get().unwrap(), &Container::shared().resolve::<SharedOnly>().unwrap()));
    assert!(Container::new().resolve::<SharedOnly>().is_err());
}

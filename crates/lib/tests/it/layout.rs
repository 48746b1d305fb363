use std::{cell::RefCell, rc::Rc};

use dynamic_layout::layout::{MultiSize, Size, SizeObserver, tree_height};

/// Observer double that records calls into a shared log.
#[derive(Clone, Default)]
struct SharedLog(Rc<RefCell<Vec<String>>>);

impl SizeObserver<&'static str> for SharedLog {
    fn observe(&mut self, element: &&'static str) {
        self.0.borrow_mut().push(format!("observe {element}"));
    }
    fn unobserve(&mut self, element: &&'static str) {
        self.0.borrow_mut().push(format!("unobserve {element}"));
    }
    fn disconnect(&mut self) {
        self.0.borrow_mut().push("disconnect".to_string());
    }
}

#[test]
fn observe_calls_are_paired() {
    let log = SharedLog::default();
    {
        let mut sizes: MultiSize<&str, &'static str, SharedLog> = MultiSize::new();
        sizes.set_ref("nav", Some("nav-1"));
        sizes.attach(log.clone());
        sizes.set_ref("nav", Some("nav-2"));
        sizes.set_ref("nav", None);
    }
    assert_eq!(
        *log.0.borrow(),
        vec![
            "observe nav-1",
            "unobserve nav-1",
            "observe nav-2",
            "unobserve nav-2",
            "disconnect",
        ]
    );
}

#[test]
fn nav_height_drives_tree_height() {
    let mut sizes: MultiSize<&str, &'static str, SharedLog> = MultiSize::new();
    sizes.attach(SharedLog::default());
    sizes.set_ref("navContainer", Some("nav"));

    assert!(sizes.on_resize(&"nav", 320.0, 699.7));
    assert_eq!(sizes.size(&"navContainer"), Some(Size { width: 320, height: 700 }));

    let nav = sizes.size(&"navContainer").map(|s| f64::from(s.height));
    assert_eq!(tree_height(nav), 620.0);
}

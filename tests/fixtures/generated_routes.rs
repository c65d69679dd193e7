// Generated by routify. Do not edit.

pub static ROUTES: ::routify::StaticTable<Handler> = ::routify::StaticTable { methods: &[
    ("GET", ::routify::StaticNode {
        handler: None,
        param: None,
        literals: &[
            ("/", ::routify::StaticNode {
                handler: Some(handlers::index),
                param: None,
                literals: &[],
                child: None,
            }),
            ("archives", ::routify::StaticNode {
                handler: None,
                param: None,
                literals: &[],
                child: Some(&::routify::StaticNode {
                    handler: None,
                    param: Some(::routify::StaticParam { name: "year", validator: Some(validators::is_year) }),
                    literals: &[],
                    child: Some(&::routify::StaticNode {
                        handler: Some(handlers::archive),
                        param: Some(::routify::StaticParam { name: "month", validator: Some(validators::is_month) }),
                        literals: &[],
                        child: None,
                    }),
                }),
            }),
            ("files", ::routify::StaticNode {
                handler: None,
                param: None,
                literals: &[],
                child: Some(&::routify::StaticNode {
                    handler: None,
                    param: Some(::routify::StaticParam { name: "name", validator: None }),
                    literals: &[
                        ("raw", ::routify::StaticNode {
                            handler: Some(handlers::raw_file),
                            param: None,
                            literals: &[],
                            child: None,
                        }),
                    ],
                    child: None,
                }),
            }),
            ("testing/hello", ::routify::StaticNode {
                handler: Some(handlers::hello),
                param: None,
                literals: &[
                    ("world", ::routify::StaticNode {
                        handler: Some(handlers::hello_world),
                        param: None,
                        literals: &[],
                        child: None,
                    }),
                ],
                child: None,
            }),
            ("users", ::routify::StaticNode {
                handler: Some(handlers::list_users),
                param: None,
                literals: &[
                    ("me", ::routify::StaticNode {
                        handler: Some(handlers::me),
                        param: None,
                        literals: &[],
                        child: None,
                    }),
                ],
                child: Some(&::routify::StaticNode {
                    handler: Some(handlers::show_user),
                    param: Some(::routify::StaticParam { name: "id", validator: Some(validators::is_number) }),
                    literals: &[],
                    child: None,
                }),
            }),
        ],
        child: None,
    }),
    ("POST", ::routify::StaticNode {
        handler: None,
        param: None,
        literals: &[
            ("users", ::routify::StaticNode {
                handler: Some(handlers::create_user),
                param: None,
                literals: &[],
                child: None,
            }),
        ],
        child: None,
    }),
] };

// Generated by routify. Do not edit.

pub static ROUTES: ::routify::StaticTable<Handler> = ::routify::StaticTable { methods: &[
    ("GET", ::routify::StaticNode {
        handler: None,
        param: None,
        literals: &[
            ("nofunc", ::routify::StaticNode {
                handler: None,
                param: None,
                literals: &[],
                child: Some(&::routify::StaticNode {
                    handler: None,
                    param: Some(::routify::StaticParam { name: "a", validator: None }),
                    literals: &[],
                    child: Some(&::routify::StaticNode {
                        handler: None,
                        param: Some(::routify::StaticParam { name: "b", validator: None }),
                        literals: &[],
                        child: Some(&::routify::StaticNode {
                            handler: None,
                            param: Some(::routify::StaticParam { name: "c", validator: None }),
                            literals: &[],
                            child: Some(&::routify::StaticNode {
                                handler: None,
                                param: Some(::routify::StaticParam { name: "d", validator: None }),
                                literals: &[],
                                child: Some(&::routify::StaticNode {
                                    handler: None,
                                    param: Some(::routify::StaticParam { name: "e", validator: None }),
                                    literals: &[],
                                    child: Some(&::routify::StaticNode {
                                        handler: None,
                                        param: Some(::routify::StaticParam { name: "f", validator: None }),
                                        literals: &[],
                                        child: Some(&::routify::StaticNode {
                                            handler: None,
                                            param: Some(::routify::StaticParam { name: "g", validator: None }),
                                            literals: &[],
                                            child: Some(&::routify::StaticNode {
                                                handler: None,
                                                param: Some(::routify::StaticParam { name: "h", validator: None }),
                                                literals: &[],
                                                child: Some(&::routify::StaticNode {
                                                    handler: None,
                                                    param: Some(::routify::StaticParam { name: "i", validator: None }),
                                                    literals: &[],
                                                    child: Some(&::routify::StaticNode {
                                                        handler: None,
                                                        param: Some(::routify::StaticParam { name: "j", validator: None }),
                                                        literals: &[],
                                                        child: Some(&::routify::StaticNode {
                                                            handler: None,
                                                            param: Some(::routify::StaticParam { name: "k", validator: None }),
                                                            literals: &[],
                                                            child: Some(&::routify::StaticNode {
                                                                handler: None,
                                                                param: Some(::routify::StaticParam { name: "l", validator: None }),
                                                                literals: &[],
                                                                child: Some(&::routify::StaticNode {
                                                                    handler: None,
                                                                    param: Some(::routify::StaticParam { name: "m", validator: None }),
                                                                    literals: &[],
                                                                    child: Some(&::routify::StaticNode {
                                                                        handler: None,
                                                                        param: Some(::routify::StaticParam { name: "n", validator: None }),
                                                                        literals: &[],
                                                                        child: Some(&::routify::StaticNode {
                                                                            handler: None,
                                                                            param: Some(::routify::StaticParam { name: "o", validator: None }),
                                                                            literals: &[],
                                                                            child: Some(&::routify::StaticNode {
                                                                                handler: None,
                                                                                param: Some(::routify::StaticParam { name: "p", validator: None }),
                                                                                literals: &[],
                                                                                child: Some(&::routify::StaticNode {
                                                                                    handler: None,
                                                                                    param: Some(::routify::StaticParam { name: "q", validator: None }),
                                                                                    literals: &[],
                                                                                    child: Some(&::routify::StaticNode {
                                                                                        handler: None,
                                                                                        param: Some(::routify::StaticParam { name: "r", validator: None }),
                                                                                        literals: &[],
                                                                                        child: Some(&::routify::StaticNode {
                                                                                            handler: None,
                                                                                            param: Some(::routify::StaticParam { name: "s", validator: None }),
                                                                                            literals: &[],
                                                                                            child: Some(&::routify::StaticNode {
                                                                                                handler: None,
                                                                                                param: Some(::routify::StaticParam { name: "t", validator: None }),
                                                                                                literals: &[],
                                                                                                child: Some(&::routify::StaticNode {
                                                                                                    handler: Some(handlers::LONG_PARAM),
                                                                                                    param: Some(::routify::StaticParam { name: "u", validator: None }),
                                                                                                    literals: &[],
                                                                                                    child: None,
                                                                                                }),
                                                                                            }),
                                                                                        }),
                                                                                    }),
                                                                                }),
                                                                            }),
                                                                        }),
                                                                    }),
                                                                }),
                                                            }),
                                                        }),
                                                    }),
                                                }),
                                            }),
                                        }),
                                    }),
                                }),
                            }),
                        }),
                    }),
                }),
            }),
            ("schemas", ::routify::StaticNode {
                handler: None,
                param: None,
                literals: &[],
                child: Some(&::routify::StaticNode {
                    handler: None,
                    param: Some(::routify::StaticParam { name: "schema", validator: None }),
                    literals: &[
                        ("archives", ::routify::StaticNode {
                            handler: None,
                            param: None,
                            literals: &[],
                            child: Some(&::routify::StaticNode {
                                handler: None,
                                param: Some(::routify::StaticParam { name: "year", validator: Some(validators::is_year) }),
                                literals: &[],
                                child: Some(&::routify::StaticNode {
                                    handler: None,
                                    param: Some(::routify::StaticParam { name: "month", validator: Some(validators::is_month) }),
                                    literals: &[],
                                    child: Some(&::routify::StaticNode {
                                        handler: Some(handlers::ARCHIVE),
                                        param: Some(::routify::StaticParam { name: "day", validator: Some(validators::is_day) }),
                                        literals: &[],
                                        child: None,
                                    }),
                                }),
                            }),
                        }),
                    ],
                    child: None,
                }),
            }),
            ("static/a/b/c/d/e/f/g/h/i/j/k/l/m/n/o/p/q/r/s/t/u", ::routify::StaticNode {
                handler: Some(handlers::LONG_STATIC),
                param: None,
                literals: &[],
                child: None,
            }),
        ],
        child: None,
    }),
] };

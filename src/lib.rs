//! # Imgaize
//!
//! Site core and static generator for the Imgaize in-browser image
//! converter. The format catalog is the data source: every (input,
//! encodable output) pair becomes a conversion landing page addressed by a
//! `<from>-to-<to>` slug, and the sitemap lists them all.
//!
//! # Architecture: Pure Core, Thin Edges
//!
//! The core is four layers of pure functions over one static table:
//!
//! ```text
//! catalog      static format table           (leaf, no dependencies)
//! slug         <from>-to-<to> codec          (reads catalog)
//! conversions  cartesian pair enumeration    (reads catalog + slug)
//! sitemap      XML serialization             (reads conversions)
//! ```
//!
//! Everything else — the route contract, HTML generation, the CLI — is
//! glue around those four. No layer performs I/O or holds mutable state:
//! the catalog is built once at startup and shared by reference, so any
//! number of concurrent callers can parse slugs or build sitemaps without
//! synchronization.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | The static format table: descriptors, lookups, input/output sets |
//! | [`slug`] | Conversion slug grammar, parsing against the catalog, generation |
//! | [`conversions`] | Enumeration of every valid (source, target) pair |
//! | [`sitemap`] | Sitemap XML serialization and the HTTP endpoint contract |
//! | [`route`] | URL slug → page metadata (titles, descriptions, not-found taxonomy) |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`generate`] | Static HTML site rendering with Maud |
//! | [`output`] | CLI output formatting — pure `format_*` functions + print wrappers |
//!
//! # Design Decisions
//!
//! ## Catalog Order Is Part of the Contract
//!
//! The format table's declaration order decides extension-ambiguity
//! tie-breaks ("first match wins") and the enumeration order of every
//! conversion — which in turn fixes sitemap entry order. Treating order as
//! data keeps builds reproducible: the same catalog always produces a
//! byte-identical sitemap, so deploy diffs only show real changes.
//!
//! ## Total Functions at the Core, Errors at the Edge
//!
//! Catalog lookups and slug parsing never fail loudly — malformed input
//! yields `None`. The [`route`] layer is where absence becomes a
//! user-facing not-found, split into the two classes the site words
//! differently: "not a slug at all" versus "a slug naming formats we don't
//! support".
//!
//! ## Encodability Gates Targets Everywhere
//!
//! Browsers decode more formats than they encode. A format with
//! `can_encode = false` (GIF, TIFF, ICO, HEIC) appears only as a
//! conversion *source*: the enumerator never emits it as a target and the
//! slug parser refuses it as one — even through an extension alias — so no
//! reachable URL promises a conversion the browser cannot deliver.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system: malformed markup is a build error, interpolation is
//! auto-escaped, and there is no template directory to ship. The generated
//! pages are plain HTML with inline CSS — droppable on any static host.

pub mod catalog;
pub mod config;
pub mod conversions;
pub mod generate;
pub mod output;
pub mod route;
pub mod sitemap;
pub mod slug;

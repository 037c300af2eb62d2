pub mod core;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod query;
pub mod search;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                        LETTRA STRUCT ARCHITECTURE                        │
└──────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── CORE LAYER ────────────────────────────────┐
│                                                                          │
│  ┌─────────────────────┐  ┌─────────────────────┐  ┌──────────────────┐  │
│  │ struct EngineConfig │  │ struct Corpus       │  │ struct Document  │  │
│  │ • search_fields     │  │ • documents:        │  │ • fields:        │  │
│  │ • max_terms         │  │   Vec<Document>     │  │   FieldMap       │  │
│  │ • window_size       │  │   (position = id)   │  │ • text: String   │  │
│  │ • top_n             │  └─────────────────────┘  └──────────────────┘  │
│  │ • cache sizes       │                                                 │
│  └─────────────────────┘  ┌─────────────────────┐  ┌──────────────────┐  │
│                           │ enum FieldValue     │  │ struct Error     │  │
│  ┌─────────────────────┐  │ • Text(String)      │  │ • kind:          │  │
│  │ struct EngineStats  │  │ • List(Vec<String>) │  │   ErrorKind      │  │
│  │ • document_count    │  │ • Number(f64)       │  │ • context        │  │
│  │ • vocabulary_size   │  │ • Bool(bool)        │  └──────────────────┘  │
│  │ • cache stats       │  └─────────────────────┘                        │
│  └─────────────────────┘                                                 │
└──────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── ANALYSIS LAYER ──────────────────────────────┐
│                                                                          │
│  ┌──────────────────────────┐  ┌───────────────────────────────────────┐ │
│  │ trait Lemmatizer         │  │ struct Normalizer                     │ │
│  │ • analyze(&str)          │  │ • lemmatizer: Arc<dyn Lemmatizer>     │ │
│  │   -> Vec<AnalyzedToken>  │  │ • stop_words: StopWords               │ │
│  │ • name()                 │  │ • cache: Mutex<LruCache> (memoized)   │ │
│  │   impl SnowballLemmatizer│  │ • hit_count / miss_count: AtomicUsize │ │
│  └──────────────────────────┘  └───────────────────────────────────────┘ │
│  ┌──────────────────────────┐  ┌───────────────────────────────────────┐ │
│  │ struct AnalyzedToken     │  │ struct StopWords                      │ │
│  │ • surface / lemma        │  │ • words: HashSet<String> (russian)    │ │
│  │ • offset (chars), kind   │  └───────────────────────────────────────┘ │
│  └──────────────────────────┘                                            │
└──────────────────────────────────────────────────────────────────────────┘

┌───────────────────────── INDEX + SCORING LAYER ──────────────────────────┐
│                                                                          │
│  ┌──────────────────────────┐  ┌───────────────────────────────────────┐ │
│  │ struct Vocabulary        │  │ struct VectorIndex                    │ │
│  │ • terms: HashMap<_, u32> │  │ • vocabulary: Vocabulary              │ │
│  │ • document_frequencies   │  │ • idf: Vec<f32>                       │ │
│  │   (n-grams 1..=3)        │  │ • rows: Vec<Vec<(u32, f32)>> (unit)   │ │
│  └──────────────────────────┘  │ • to_bytes / from_bytes (versioned)   │ │
│                                └───────────────────────────────────────┘ │
│  ┌──────────────────────────────────────────────────────────────────────┐│
│  │ scoring: sparse_dot / cosine over column-sorted unit vectors         ││
│  └──────────────────────────────────────────────────────────────────────┘│
└──────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────── SEARCH LAYER ───────────────────────────────┐
│                                                                          │
│  ┌───────────────────────────────────┐  ┌─────────────────────────────┐  │
│  │ struct QueryEngine                │  │ struct ResultCache          │  │
│  │ • corpus: Arc<Corpus>             │  │ • cache: Mutex<LruCache>    │  │
│  │ • index: Arc<VectorIndex>         │  │ • key: (query, top_n)       │  │
│  │ • normalizer: Arc<Normalizer>     │  │ • hit / miss: AtomicUsize   │  │
│  │ • extractor: ExcerptExtractor     │  └─────────────────────────────┘  │
│  │ • cache: ResultCache              │  ┌─────────────────────────────┐  │
│  │ • search(query, top_n)            │  │ struct QueryResult          │  │
│  │   -> Vec<QueryResult>             │  │ • fields / score / excerpt  │  │
│  └───────────────────────────────────┘  └─────────────────────────────┘  │
└──────────────────────────────────────────────────────────────────────────┘
*/

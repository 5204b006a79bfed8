/// Generates the shared test-suite for a graph representation.
/// Every graph should implement `GraphNodeOrder`, `GraphEdgeOrder` and `GraphNew`.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, prelude::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of exactly `m` random edges for nodes `0..n`.
            /// Parallel edges and self-loops are intentionally kept.
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    Edge(u, v)
                }).collect_vec()
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert!(graph.is_singleton_graph());

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());

                let checked = <$graph>::try_new(n as i64).unwrap();
                assert_eq!(checked.number_of_nodes(), n);
            }

            assert!(<$graph>::try_new(-1).is_err());
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m in [0, n / 2, n * 2, n * 5] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m as NumEdges);

                        let mut adj_lists: Vec<Vec<Node>> = vec![Vec::new(); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_lists[u as usize].push(v);
                        }

                        let graph = <$graph>::from_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m as NumEdges);

                        assert_eq!(edges.iter().copied().sorted().collect_vec(), graph.ordered_edges());

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of(u).collect_vec(), adj_lists[u as usize]);
                            assert_eq!(graph.degree_of(u) as usize, adj_lists[u as usize].len());
                        }

                        assert_eq!(
                            graph.degrees().map(|d| d as usize).sum::<usize>(),
                            m as usize
                        );
                        assert_eq!(
                            graph.vertices_without_neighbors().collect_vec(),
                            (0..n).filter(|&u| adj_lists[u as usize].is_empty()).collect_vec()
                        );
                    }
                }
            }
        }
    };
    ($graph:ident: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m in [0, n / 2, n * 2, n * 5] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m as NumEdges);

                        let mut in_degs: Vec<NumNodes> = vec![0; n as usize];
                        let mut out_degs: Vec<NumNodes> = vec![0; n as usize];
                        for &Edge(u, v) in &edges {
                            out_degs[u as usize] += 1;
                            in_degs[v as usize] += 1;
                        }

                        let graph = <$graph>::from_edges(n, edges.iter());

                        assert_eq!(graph.in_degrees().collect_vec(), in_degs);
                        assert_eq!(graph.out_degrees().collect_vec(), out_degs);
                        assert_eq!(graph.in_degrees().sum::<NumNodes>(), graph.number_of_edges());
                        assert_eq!(graph.out_degrees().sum::<NumNodes>(), graph.number_of_edges());

                        assert_eq!(
                            graph.sources().collect_vec(),
                            (0..n).filter(|&u| in_degs[u as usize] == 0).collect_vec()
                        );
                        assert_eq!(
                            graph.sinks().collect_vec(),
                            (0..n).filter(|&u| out_degs[u as usize] == 0).collect_vec()
                        );
                        assert_eq!(graph.is_map(), out_degs.iter().all(|&d| d == 1));

                        assert_eq!(graph.max_in_degree(), in_degs.iter().copied().max().unwrap_or(0));
                        assert_eq!(graph.max_out_degree(), out_degs.iter().copied().max().unwrap_or(0));
                        assert_eq!(graph.max_degree(), graph.max_out_degree());

                        for u in 0..n {
                            assert_eq!(graph.total_degree_of(u), in_degs[u as usize] + out_degs[u as usize]);
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for _ in 0..10 {
                    let mut graph = <$graph>::new(n);
                    let mut m: NumEdges = 0;

                    for _ in 0..(3 * n) {
                        // roughly every tenth edge has an endpoint out of range
                        let u = rng.random_range(0..(n + n / 10 + 1));
                        let v = rng.random_range(0..(n + n / 10 + 1));

                        let result = graph.try_add_edge(u, v);
                        if u < n && v < n {
                            assert!(result.is_ok());
                            m += 1;
                        } else {
                            assert!(result.is_err());
                        }

                        assert_eq!(graph.number_of_edges(), m);
                        assert_eq!(graph.in_degrees().sum::<NumNodes>(), m);
                        assert_eq!(graph.out_degrees().sum::<NumNodes>(), m);
                    }
                }
            }
        }
    };
    ($graph:ident: Clone) => {
        #[test]
        fn test_clone() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [1 as NumNodes, 10, 50] {
                let edges = random_edges(rng, n, 4 * n);
                let mut graph = <$graph>::from_edges(n, edges.iter());
                let copy = graph.clone();

                for u in 0..n {
                    assert_eq!(graph.as_neighbors_slice(u), copy.as_neighbors_slice(u));
                    assert_eq!(graph.in_degree_of(u), copy.in_degree_of(u));
                }
                assert_eq!(graph.edges().collect_vec(), copy.edges().collect_vec());

                graph.add_edge(0, 0);
                assert_eq!(copy.number_of_edges(), 4 * n);
                assert_eq!(graph.number_of_edges(), 4 * n + 1);
                assert_eq!(copy.out_degree_of(0) + 1, graph.out_degree_of(0));
            }
        }
    };
    ($graph:ident: Transpose) => {
        #[test]
        fn test_transpose() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [1 as NumNodes, 10, 50] {
                for _ in 0..10 {
                    let edges = random_edges(rng, n, 3 * n);
                    let graph = <$graph>::from_edges(n, edges.iter());
                    let reversed = graph.reversed();

                    assert_eq!(
                        reversed.ordered_edges(),
                        edges.iter().map(|e| e.reverse()).sorted().collect_vec()
                    );
                    assert_eq!(reversed.reversed().ordered_edges(), graph.ordered_edges());

                    for u in 0..n {
                        assert_eq!(reversed.in_degree_of(u), graph.out_degree_of(u));
                        assert_eq!(reversed.out_degree_of(u), graph.in_degree_of(u));
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
